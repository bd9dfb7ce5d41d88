use partition_lattice::error::PartitionError;
use partition_lattice::partition::*;

use super::strategy::partition_strategy;

use proptest::{prop_assert, prop_assert_eq, proptest};

#[test]
fn scenario_partitions_of_four() {
    let ground = GroundSet::new(1..=4);
    let p = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(p.block_count(), 2);
    assert_eq!(p.rank(), 2);
    assert_eq!(p.ground(), ground);
}

#[test]
fn blocks_in_any_order_are_equal() {
    let ground = GroundSet::new(['a', 'b', 'c']);
    let p = Partition::new(&ground, vec![vec!['c'], vec!['b', 'a']]).unwrap();
    let q = Partition::new(&ground, vec![vec!['a', 'b'], vec!['c']]).unwrap();
    assert_eq!(p, q);
}

#[test]
fn try_from_validates() {
    let ok: Result<Partition<u8>, _> = vec![vec![1, 2], vec![3]].try_into();
    assert!(ok.is_ok());

    let overlapping: Result<Partition<u8>, _> = vec![vec![1, 2], vec![2, 3]].try_into();
    assert_eq!(
        overlapping,
        Err(PartitionError::DuplicateElement("2".to_string()))
    );
}

#[test]
fn ensure_over_detects_mismatch() {
    let ground = GroundSet::new(1..=3);
    let p = Partition::from_blocks(vec![vec![1, 2], vec![3]]).unwrap();
    assert_eq!(p.ensure_over(&ground), Ok(()));
    assert_eq!(
        p.ensure_over(&GroundSet::new(1..=4)),
        Err(PartitionError::MismatchedGroundSet)
    );
    assert_eq!(
        p.ensure_over(&GroundSet::new(2..=4)),
        Err(PartitionError::MismatchedGroundSet)
    );
}

proptest! {
    #[test]
    fn partition_covers_ground((ground, p) in partition_strategy()) {
        prop_assert_eq!(p.ground(), ground.clone());
        prop_assert_eq!(p.element_count(), ground.len());
        for x in ground.iter() {
            let block = p.block_of(x);
            prop_assert!(block.is_some_and(|b| b.contains(x)));
        }
    }

    #[test]
    fn rebuilding_from_blocks_is_identity((ground, p) in partition_strategy()) {
        let rebuilt = Partition::new(&ground, p.blocks().iter().rev().cloned().collect());
        prop_assert_eq!(rebuilt, Ok(p));
    }
}
