//! Monotone maps out of the partition lattice, and the *generative effect* of a map that
//! preserves order but not joins.
//!
//! A map `Φ` is monotone when `P ≤ Q` implies `Φ(P) ≤ Φ(Q)`. Since `P ≤ P ∨ Q` and `Q ≤ P ∨ Q`,
//! monotonicity alone gives
//!
//! ```text
//! Φ(P) ∨ Φ(Q) ≤ Φ(P ∨ Q)
//! ```
//!
//! When the inequality is strict, joining the systems first "generates" something neither part
//! showed on its own.
use crate::error::PartitionError;
use crate::order::JoinSemilattice;
use crate::partition::{self, GroundSet, Partition};

use core::fmt::Debug;

/// An order-preserving map from partitions of `T` into a join semilattice.
pub trait MonotoneMap<T> {
    type Output: JoinSemilattice;

    fn apply(&self, partition: &Partition<T>) -> Self::Output;
}

/// `Φ(P) = true` iff `a` and `b` lie in a common block of `P`.
///
/// Coarsening can only merge blocks, so this is monotone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameBlock<T> {
    pub a: T,
    pub b: T,
}

impl<T> SameBlock<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }
}

impl<T: Ord + Clone> MonotoneMap<T> for SameBlock<T> {
    type Output = bool;

    fn apply(&self, partition: &Partition<T>) -> bool {
        partition.same_block(&self.a, &self.b)
    }
}

/// Values of a map on two partitions and on their join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerativeEffect<V> {
    /// `Φ(P)`
    pub left: V,
    /// `Φ(Q)`
    pub right: V,
    /// `Φ(P ∨ Q)`
    pub joined: V,
}

impl<V: JoinSemilattice> GenerativeEffect<V> {
    /// `Φ(P) ∨ Φ(Q)`
    pub fn combined(&self) -> V {
        self.left.join(&self.right)
    }

    /// Whether `Φ(P) ∨ Φ(Q) ≤ Φ(P ∨ Q)`. Always true for a monotone map.
    pub fn holds(&self) -> bool {
        self.combined() <= self.joined
    }

    /// Whether the inequality is strict, i.e. the map does not preserve this join.
    pub fn is_generative(&self) -> bool {
        self.combined() < self.joined
    }
}

/// Evaluate `map` on `p`, `q` and `p ∨ q`.
///
/// ```rust
/// # use partition_lattice::monotone::*;
/// # use partition_lattice::partition::*;
/// let ground = GroundSet::new(1..=4);
/// let p = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let q = Partition::new(&ground, vec![vec![1, 3], vec![2, 4]]).unwrap();
///
/// let effect = generative_effect(&SameBlock::new(1, 4), &p, &q, &ground).unwrap();
/// assert_eq!((effect.left, effect.right, effect.joined), (false, false, true));
/// assert!(effect.holds());
/// assert!(effect.is_generative());
/// ```
///
/// # Errors
///
/// [`PartitionError::MismatchedGroundSet`] if `p` or `q` is not a partition of `ground`.
pub fn generative_effect<T, M>(
    map: &M,
    p: &Partition<T>,
    q: &Partition<T>,
    ground: &GroundSet<T>,
) -> Result<GenerativeEffect<M::Output>, PartitionError>
where
    T: Ord + Clone + Debug,
    M: MonotoneMap<T>,
{
    let joined = partition::join(p, q, ground)?;
    Ok(GenerativeEffect {
        left: map.apply(p),
        right: map.apply(q),
        joined: map.apply(&joined),
    })
}
