//! The full lattice of partitions of a small ground set.
use crate::error::PartitionError;
use crate::log::{debug, warn};
use crate::monotone::MonotoneMap;
use crate::order::{comparable_pairs, cover_edges, CoverEdge};
use crate::partition::{self, enumerate_partitions, GroundSet, Partition};

use core::fmt::Debug;

/// Ground sets above this size have lattices too large to inspect pairwise.
pub const LARGE_GROUND_SET: usize = 8;

/// All partitions of a ground set, in enumeration order.
///
/// Positions in [`PartitionLattice::partitions`] are the indices used by
/// [`PartitionLattice::cover_edges`] and [`PartitionLattice::refinement_pairs`].
#[derive(Debug, Clone)]
pub struct PartitionLattice<T> {
    ground: GroundSet<T>,
    partitions: Vec<Partition<T>>,
}

/// Result of checking that a join (or meet) really is the least (or greatest) bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundCheck<T> {
    /// The computed join or meet.
    pub bound: Partition<T>,
    /// Whether `bound` lies above (resp. below) both inputs.
    pub is_bound: bool,
    /// Whether `bound` lies below every upper bound (resp. above every lower bound).
    pub is_extremal: bool,
    /// Number of upper (resp. lower) bounds of the inputs in the lattice.
    pub candidates: usize,
}

impl<T: Ord + Clone + Debug> PartitionLattice<T> {
    pub fn new(ground: GroundSet<T>) -> Self {
        if ground.len() > LARGE_GROUND_SET {
            warn!(
                "enumerating partitions of a {}-element set; pairwise checks will be slow",
                ground.len()
            );
        }
        let partitions = enumerate_partitions(&ground);
        Self { ground, partitions }
    }

    pub fn ground(&self) -> &GroundSet<T> {
        &self.ground
    }

    pub fn partitions(&self) -> &[Partition<T>] {
        &self.partitions
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Never true: even the empty set has one partition.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn index_of(&self, p: &Partition<T>) -> Option<usize> {
        self.partitions.iter().position(|q| q == p)
    }

    /// The discrete partition.
    pub fn bottom(&self) -> Partition<T> {
        Partition::discrete(&self.ground)
    }

    /// The one-block partition.
    pub fn top(&self) -> Partition<T> {
        Partition::indiscrete(&self.ground)
    }

    /// All pairs `(i, j)`, `i != j`, where partition `i` refines partition `j`.
    pub fn refinement_pairs(&self) -> Vec<(usize, usize)> {
        comparable_pairs(&self.partitions)
    }

    /// Edges of the Hasse diagram, from finer (`lower`) to coarser (`upper`).
    pub fn cover_edges(&self) -> Vec<CoverEdge> {
        let edges = cover_edges(&self.partitions);
        debug!(
            "{} cover edges among {} partitions",
            edges.len(),
            self.partitions.len()
        );
        edges
    }

    /// Number of partitions of each rank `0..=|ground| - 1`, i.e. with `|ground| - rank` blocks.
    pub fn rank_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.ground.len().max(1)];
        for p in &self.partitions {
            sizes[p.rank()] += 1;
        }
        sizes
    }

    /// Every partition `c` with `p ≤ c` and `q ≤ c`.
    pub fn upper_bounds(&self, p: &Partition<T>, q: &Partition<T>) -> Vec<&Partition<T>> {
        self.partitions
            .iter()
            .filter(|c| p <= *c && q <= *c)
            .collect()
    }

    /// Every partition `c` with `c ≤ p` and `c ≤ q`.
    pub fn lower_bounds(&self, p: &Partition<T>, q: &Partition<T>) -> Vec<&Partition<T>> {
        self.partitions
            .iter()
            .filter(|c| *c <= p && *c <= q)
            .collect()
    }

    /// Compute `p ∨ q` and check it against every upper bound in the lattice.
    ///
    /// # Errors
    ///
    /// [`PartitionError::MismatchedGroundSet`] if `p` or `q` is not a partition of this lattice's
    /// ground set.
    pub fn check_join(
        &self,
        p: &Partition<T>,
        q: &Partition<T>,
    ) -> Result<BoundCheck<T>, PartitionError> {
        let bound = partition::join(p, q, &self.ground)?;
        let uppers = self.upper_bounds(p, q);
        Ok(BoundCheck {
            is_bound: p <= &bound && q <= &bound,
            is_extremal: uppers.iter().all(|c| &bound <= *c),
            candidates: uppers.len(),
            bound,
        })
    }

    /// Compute `p ∧ q` and check it against every lower bound in the lattice.
    ///
    /// # Errors
    ///
    /// [`PartitionError::MismatchedGroundSet`] if `p` or `q` is not a partition of this lattice's
    /// ground set.
    pub fn check_meet(
        &self,
        p: &Partition<T>,
        q: &Partition<T>,
    ) -> Result<BoundCheck<T>, PartitionError> {
        let bound = partition::meet(p, q, &self.ground)?;
        let lowers = self.lower_bounds(p, q);
        Ok(BoundCheck {
            is_bound: &bound <= p && &bound <= q,
            is_extremal: lowers.iter().all(|c| *c <= &bound),
            candidates: lowers.len(),
            bound,
        })
    }

    /// Whether `map` preserves the refinement order on the whole lattice.
    pub fn is_monotone<M: MonotoneMap<T>>(&self, map: &M) -> bool {
        let images: Vec<M::Output> = self.partitions.iter().map(|p| map.apply(p)).collect();
        self.refinement_pairs()
            .into_iter()
            .all(|(i, j)| images[i] <= images[j])
    }
}
