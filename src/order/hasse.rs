/// A covering pair `lower ⋖ upper` between positions of a collection.
///
/// In a Hasse diagram `upper` is drawn above `lower`, with a line between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverEdge {
    pub lower: usize,
    pub upper: usize,
}

/// Every pair `(i, j)` with `i != j` and `items[i] <= items[j]`.
pub fn comparable_pairs<T: PartialOrd>(items: &[T]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate() {
            if i != j && a <= b {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// The covering relation of `items`: `(i, j)` such that `items[i] < items[j]` with no `k` strictly
/// between them.
///
/// Runs in cubic time in `items.len()`, which is fine for the lattices this crate enumerates.
///
/// ```rust
/// # use partition_lattice::order::*;
/// // Divisibility on {1, 2, 3, 6}: a diamond.
/// #[derive(PartialEq)]
/// struct Div(u32);
/// impl PartialOrd for Div {
///     fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
///         use std::cmp::Ordering::*;
///         match (other.0 % self.0 == 0, self.0 % other.0 == 0) {
///             (true, true) => Some(Equal),
///             (true, false) => Some(Less),
///             (false, true) => Some(Greater),
///             (false, false) => None,
///         }
///     }
/// }
///
/// let items = [Div(1), Div(2), Div(3), Div(6)];
/// let edges: Vec<_> = cover_edges(&items).iter().map(|e| (e.lower, e.upper)).collect();
/// assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
/// ```
pub fn cover_edges<T: PartialOrd>(items: &[T]) -> Vec<CoverEdge> {
    let n = items.len();
    let less = strict_order_matrix(items);

    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if !less[i][j] {
                continue;
            }
            let between = (0..n).any(|k| less[i][k] && less[k][j]);
            if !between {
                edges.push(CoverEdge { lower: i, upper: j });
            }
        }
    }
    edges
}

// less[i][j] iff items[i] < items[j]
fn strict_order_matrix<T: PartialOrd>(items: &[T]) -> Vec<Vec<bool>> {
    items
        .iter()
        .map(|a| items.iter().map(|b| a < b).collect())
        .collect()
}
