use num_traits::{One, Zero};

/// The number of partitions of an `n`-element set, computed with the Bell triangle.
///
/// ```rust
/// # use partition_lattice::partition::bell_number;
/// let bells: Vec<u64> = (0..8).map(bell_number).collect();
/// assert_eq!(bells, vec![1, 1, 2, 5, 15, 52, 203, 877]);
/// ```
pub fn bell_number<N: Zero + One + Clone>(n: usize) -> N {
    let mut row = vec![N::one()];
    for _ in 0..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        // Each row starts with the last entry of the previous one.
        let mut acc = row[row.len() - 1].clone();
        next.push(acc.clone());
        for x in row.iter() {
            acc = acc + x.clone();
            next.push(acc.clone());
        }
        row = next;
    }
    row[0].clone()
}

/// Stirling number of the second kind: partitions of an `n`-element set into exactly `k` blocks.
pub fn stirling2<N: Zero + One + Clone>(n: usize, k: usize) -> N {
    if k > n {
        return N::zero();
    }

    // prev[j] = S(i, j) for the current row i
    let mut prev = vec![N::zero(); k + 1];
    prev[0] = N::one();
    for _ in 0..n {
        let mut row = vec![N::zero(); k + 1];
        let mut j_as_n = N::zero();
        for j in 1..=k {
            j_as_n = j_as_n + N::one();
            row[j] = j_as_n.clone() * prev[j].clone() + prev[j - 1].clone();
        }
        prev = row;
    }
    prev[k].clone()
}
