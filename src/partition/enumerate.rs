use super::{GroundSet, Partition};
use crate::log::debug;

/// Every partition of `ground`, each exactly once.
///
/// Elements are placed in ground-set order, each first into every existing block and then into a
/// new block of its own. The first partition produced is therefore the one-block partition and the
/// last is the discrete one; the total is the Bell number of `ground.len()`.
///
/// ```rust
/// # use partition_lattice::partition::*;
/// let ground = GroundSet::new(['a', 'b', 'c']);
/// let partitions = enumerate_partitions(&ground);
/// assert_eq!(partitions.len(), 5);
/// assert_eq!(partitions[0], Partition::indiscrete(&ground));
/// assert_eq!(partitions[4], Partition::discrete(&ground));
/// ```
pub fn enumerate_partitions<T: Ord + Clone>(ground: &GroundSet<T>) -> Vec<Partition<T>> {
    let mut results = Vec::new();
    let mut blocks: Vec<Vec<T>> = Vec::new();

    fn walk<T: Clone>(
        idx: usize,
        elements: &[T],
        blocks: &mut Vec<Vec<T>>,
        results: &mut Vec<Partition<T>>,
    ) {
        if idx == elements.len() {
            // Elements arrive in sorted order, so blocks are sorted and ordered by least element.
            results.push(Partition::from_canonical(blocks.clone()));
            return;
        }

        let element = &elements[idx];
        for i in 0..blocks.len() {
            blocks[i].push(element.clone());
            walk(idx + 1, elements, blocks, results);
            blocks[i].pop();
        }

        blocks.push(vec![element.clone()]);
        walk(idx + 1, elements, blocks, results);
        blocks.pop();
    }

    walk(0, ground.elements(), &mut blocks, &mut results);
    debug!(
        "enumerated {} partitions of a {}-element set",
        results.len(),
        ground.len()
    );
    results
}
