//! Set partitions of a finite ground set and the refinement order between them.
//!
//! Throughout the crate `P ≤ Q` means *`P` refines `Q`*: every block of `P` is contained in some
//! block of `Q`, so finer partitions sit lower in the lattice. The discrete partition (all
//! singletons) is the bottom element and the one-block partition is the top.
mod bell;
mod enumerate;

pub use bell::{bell_number, stirling2};
pub use enumerate::enumerate_partitions;

use crate::error::PartitionError;
use crate::log::trace;
use crate::union_find::UnionFind;

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use std::collections::BTreeMap;

/// The finite set being partitioned, stored sorted and without duplicates.
///
/// Elements are addressed by their position in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct GroundSet<T> {
    elements: Vec<T>,
}

impl<T: Ord> GroundSet<T> {
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        let mut elements: Vec<T> = elements.into_iter().collect();
        elements.sort();
        elements.dedup();
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, x: &T) -> bool {
        self.elements.binary_search(x).is_ok()
    }

    /// Position of `x` in the sorted ground set.
    pub fn index_of(&self, x: &T) -> Option<usize> {
        self.elements.binary_search(x).ok()
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Ord> FromIterator<T> for GroundSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Display> Display for GroundSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(f, &self.elements)
    }
}

/// A partition of a finite set into disjoint, non-empty blocks.
///
/// Blocks are kept in a canonical order (each block sorted, blocks sorted by their least
/// element), so two partitions compare equal exactly when they have the same blocks, regardless
/// of how they were built. The ground set of a partition is the union of its blocks.
///
/// [`PartialOrd`] is the refinement order:
///
/// ```rust
/// # use partition_lattice::partition::*;
/// let ground = GroundSet::new(1..=4);
/// let p = Partition::new(&ground, vec![vec![1, 2], vec![3], vec![4]]).unwrap();
/// let q = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let r = Partition::new(&ground, vec![vec![1, 3], vec![2, 4]]).unwrap();
///
/// assert!(p <= q);
/// assert!(p < q);
/// assert!(!(q <= r) && !(r <= q));
/// assert_eq!(q.partial_cmp(&r), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Partition<T> {
    blocks: Vec<Vec<T>>,
}

impl<T> Partition<T> {
    /// Blocks in canonical order.
    pub fn blocks(&self) -> &[Vec<T>] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Size of the ground set.
    pub fn element_count(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Height above the discrete partition: `|ground| - block_count`.
    pub fn rank(&self) -> usize {
        self.element_count() - self.block_count()
    }

    // Callers guarantee each block is sorted and blocks are ordered by their least element.
    pub(crate) fn from_canonical(blocks: Vec<Vec<T>>) -> Self {
        Self { blocks }
    }
}

impl<T: Ord + Clone> Partition<T> {
    /// The partition into singletons; the bottom of the lattice.
    pub fn discrete(ground: &GroundSet<T>) -> Self {
        Self::from_canonical(ground.iter().map(|x| vec![x.clone()]).collect())
    }

    /// The partition with a single block; the top of the lattice.
    /// The empty set has no blocks at all.
    pub fn indiscrete(ground: &GroundSet<T>) -> Self {
        if ground.is_empty() {
            return Self::from_canonical(vec![]);
        }
        Self::from_canonical(vec![ground.elements().to_vec()])
    }

    pub fn ground(&self) -> GroundSet<T> {
        GroundSet::new(self.blocks.iter().flatten().cloned())
    }

    /// Whether both partitions cover exactly the same elements.
    pub fn same_ground(&self, other: &Self) -> bool {
        self.sorted_elements() == other.sorted_elements()
    }

    /// The block containing `x`, if any.
    pub fn block_of(&self, x: &T) -> Option<&[T]> {
        self.blocks
            .iter()
            .find(|block| block.binary_search(x).is_ok())
            .map(Vec::as_slice)
    }

    /// Whether `a` and `b` lie in a common block.
    pub fn same_block(&self, a: &T, b: &T) -> bool {
        self.block_of(a)
            .is_some_and(|block| block.binary_search(b).is_ok())
    }

    /// Whether `self ≤ other`, i.e. every block of `self` is contained in a block of `other`.
    ///
    /// Partitions of different ground sets never refine one another.
    pub fn refines(&self, other: &Self) -> bool {
        self.same_ground(other) && self.refines_unchecked(other)
    }

    /// Least upper bound under refinement.
    ///
    /// # Errors
    ///
    /// [`PartitionError::MismatchedGroundSet`] if the partitions cover different elements.
    pub fn join(&self, other: &Self) -> Result<Self, PartitionError> {
        if !self.same_ground(other) {
            return Err(PartitionError::MismatchedGroundSet);
        }
        Ok(self.join_unchecked(other, &self.ground()))
    }

    /// Greatest lower bound under refinement.
    ///
    /// # Errors
    ///
    /// [`PartitionError::MismatchedGroundSet`] if the partitions cover different elements.
    pub fn meet(&self, other: &Self) -> Result<Self, PartitionError> {
        if !self.same_ground(other) {
            return Err(PartitionError::MismatchedGroundSet);
        }
        Ok(self.meet_unchecked(other))
    }

    fn sorted_elements(&self) -> Vec<&T> {
        let mut elements: Vec<&T> = self.blocks.iter().flatten().collect();
        elements.sort();
        elements
    }

    // Maps each element to the index of its block.
    fn block_index(&self) -> BTreeMap<&T, usize> {
        self.blocks
            .iter()
            .enumerate()
            .flat_map(|(i, block)| block.iter().map(move |x| (x, i)))
            .collect()
    }

    // Assumes both partitions share a ground set.
    fn refines_unchecked(&self, other: &Self) -> bool {
        let index = other.block_index();
        self.blocks.iter().all(|block| {
            let target = block.first().and_then(|x| index.get(x));
            block.iter().all(|x| index.get(x) == target)
        })
    }

    // Assumes both partitions are partitions of `ground`.
    fn join_unchecked(&self, other: &Self, ground: &GroundSet<T>) -> Self {
        let mut uf = UnionFind::new(ground.len());
        for block in self.blocks.iter().chain(other.blocks.iter()) {
            let indices: Vec<usize> = block
                .iter()
                .filter_map(|x| ground.index_of(x))
                .collect();
            uf.union_all(&indices);
        }
        trace!(
            "join: {} components over {} elements",
            uf.components(),
            uf.len()
        );

        // Classes come out sorted and ordered by least index, which is already canonical.
        let blocks = uf
            .classes()
            .into_iter()
            .map(|class| {
                class
                    .into_iter()
                    .map(|i| ground.elements()[i].clone())
                    .collect()
            })
            .collect();
        Self::from_canonical(blocks)
    }

    // Assumes both partitions share a ground set.
    fn meet_unchecked(&self, other: &Self) -> Self {
        let index = other.block_index();
        let mut cells: BTreeMap<(usize, usize), Vec<T>> = BTreeMap::new();
        for (i, block) in self.blocks.iter().enumerate() {
            for x in block {
                if let Some(&j) = index.get(x) {
                    cells.entry((i, j)).or_default().push(x.clone());
                }
            }
        }

        let mut blocks: Vec<Vec<T>> = cells.into_values().collect();
        blocks.sort();
        Self::from_canonical(blocks)
    }
}

impl<T: Ord + Clone + Debug> Partition<T> {
    /// Build a partition of `ground` from a list of blocks, in any order.
    ///
    /// # Errors
    ///
    /// * [`PartitionError::EmptyBlock`] if some block has no elements
    /// * [`PartitionError::DuplicateElement`] if an element occurs twice
    /// * [`PartitionError::UnknownElement`] if an element is outside `ground`
    /// * [`PartitionError::MissingElement`] if an element of `ground` is in no block
    pub fn new(ground: &GroundSet<T>, blocks: Vec<Vec<T>>) -> Result<Self, PartitionError> {
        let partition = Self::from_blocks(blocks)?;
        for x in partition.blocks.iter().flatten() {
            if !ground.contains(x) {
                return Err(PartitionError::UnknownElement(format!("{x:?}")));
            }
        }

        // No duplicates and nothing foreign, so any shortfall is a missing element.
        if partition.element_count() < ground.len() {
            let index = partition.block_index();
            if let Some(x) = ground.iter().find(|x| !index.contains_key(x)) {
                return Err(PartitionError::MissingElement(format!("{x:?}")));
            }
        }
        Ok(partition)
    }

    /// Build a partition of the union of `blocks`.
    ///
    /// # Errors
    ///
    /// * [`PartitionError::EmptyBlock`] if some block has no elements
    /// * [`PartitionError::DuplicateElement`] if an element occurs twice
    pub fn from_blocks(mut blocks: Vec<Vec<T>>) -> Result<Self, PartitionError> {
        for block in blocks.iter_mut() {
            if block.is_empty() {
                return Err(PartitionError::EmptyBlock);
            }
            block.sort();
        }

        let mut elements: Vec<&T> = blocks.iter().flatten().collect();
        elements.sort();
        if let Some(pair) = elements.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(PartitionError::DuplicateElement(format!("{:?}", pair[0])));
        }

        blocks.sort();
        Ok(Self::from_canonical(blocks))
    }

    /// Check that `self` partitions exactly `ground`.
    ///
    /// # Errors
    ///
    /// [`PartitionError::MismatchedGroundSet`] otherwise.
    pub fn ensure_over(&self, ground: &GroundSet<T>) -> Result<(), PartitionError> {
        let elements = self.sorted_elements();
        if elements.len() == ground.len() && elements.into_iter().eq(ground.iter()) {
            Ok(())
        } else {
            Err(PartitionError::MismatchedGroundSet)
        }
    }
}

impl<T: Ord + Clone + Debug> TryFrom<Vec<Vec<T>>> for Partition<T> {
    type Error = PartitionError;

    fn try_from(blocks: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_blocks(blocks)
    }
}

impl<T: Ord + Clone> PartialOrd for Partition<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        if !self.same_ground(other) {
            return None;
        }
        if self.refines_unchecked(other) {
            Some(Ordering::Less)
        } else if other.refines_unchecked(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<T: Display> Display for Partition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_set(f, block)?;
        }
        write!(f, "}}")
    }
}

fn write_set<T: Display>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, x) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{x}")?;
    }
    write!(f, "}}")
}

/// Whether `p` refines `q`, where both must be partitions of `ground`.
///
/// # Errors
///
/// [`PartitionError::MismatchedGroundSet`] if either partition is not a partition of `ground`.
pub fn refines<T: Ord + Clone + Debug>(
    p: &Partition<T>,
    q: &Partition<T>,
    ground: &GroundSet<T>,
) -> Result<bool, PartitionError> {
    p.ensure_over(ground)?;
    q.ensure_over(ground)?;
    Ok(p.refines_unchecked(q))
}

/// The coarsest partition refined by both `p` and `q`.
///
/// Two elements share a block of the result exactly when they are connected by a chain of
/// elements each sharing a block of `p` or of `q` with the next.
///
/// # Errors
///
/// [`PartitionError::MismatchedGroundSet`] if either partition is not a partition of `ground`.
pub fn join<T: Ord + Clone + Debug>(
    p: &Partition<T>,
    q: &Partition<T>,
    ground: &GroundSet<T>,
) -> Result<Partition<T>, PartitionError> {
    p.ensure_over(ground)?;
    q.ensure_over(ground)?;
    Ok(p.join_unchecked(q, ground))
}

/// The finest partition refining both `p` and `q`: all non-empty intersections of their blocks.
///
/// # Errors
///
/// [`PartitionError::MismatchedGroundSet`] if either partition is not a partition of `ground`.
pub fn meet<T: Ord + Clone + Debug>(
    p: &Partition<T>,
    q: &Partition<T>,
    ground: &GroundSet<T>,
) -> Result<Partition<T>, PartitionError> {
    p.ensure_over(ground)?;
    q.ensure_over(ground)?;
    Ok(p.meet_unchecked(q))
}
