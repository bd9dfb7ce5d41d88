//! Order-theoretic glue: join semilattices and covering relations of finite posets.
mod hasse;

pub use hasse::{comparable_pairs, cover_edges, CoverEdge};

/// A partially ordered set with binary joins.
///
/// Implementations must make `join` the least upper bound for the [`PartialOrd`] order:
/// `a <= a.join(b)`, `b <= a.join(b)`, and `a.join(b) <= c` whenever `a <= c` and `b <= c`.
pub trait JoinSemilattice: PartialOrd + Sized {
    fn join(&self, other: &Self) -> Self;
}

/// Truth values ordered `false < true`, with disjunction as join.
impl JoinSemilattice for bool {
    fn join(&self, other: &Self) -> Self {
        *self || *other
    }
}
