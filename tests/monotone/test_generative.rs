use partition_lattice::lattice::PartitionLattice;
use partition_lattice::monotone::*;
use partition_lattice::partition::*;

use crate::partition::strategy::pair_strategy;

use proptest::{prop_assert, proptest};

#[test]
fn same_block_has_generative_effect() {
    let ground = GroundSet::new(1..=4);
    let p = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]]).unwrap();
    let q = Partition::new(&ground, vec![vec![1, 3], vec![2, 4]]).unwrap();

    let effect = generative_effect(&SameBlock::new(1, 4), &p, &q, &ground).unwrap();
    assert!(!effect.left);
    assert!(!effect.right);
    assert!(effect.joined);
    assert!(!effect.combined());
    assert!(effect.holds());
    assert!(effect.is_generative());
}

/// Φ(P) = "P has at most `k` blocks"; coarsening only removes blocks.
struct AtMostBlocks(usize);

impl MonotoneMap<u8> for AtMostBlocks {
    type Output = bool;

    fn apply(&self, partition: &Partition<u8>) -> bool {
        partition.block_count() <= self.0
    }
}

#[test]
fn user_defined_maps_are_monotone() {
    let lattice = PartitionLattice::new(GroundSet::new(0..4u8));
    for k in 0..=4 {
        assert!(lattice.is_monotone(&AtMostBlocks(k)));
    }
    for a in 0..4u8 {
        for b in 0..4u8 {
            assert!(lattice.is_monotone(&SameBlock::new(a, b)));
        }
    }
}

proptest! {
    #[test]
    fn monotone_maps_satisfy_inequality((ground, [p, q]) in pair_strategy(None)) {
        for a in ground.iter() {
            for b in ground.iter() {
                let effect = generative_effect(&SameBlock::new(*a, *b), &p, &q, &ground)
                    .expect("same ground set");
                prop_assert!(effect.holds());
            }
        }

        for k in 0..=ground.len() {
            let effect = generative_effect(&AtMostBlocks(k), &p, &q, &ground)
                .expect("same ground set");
            prop_assert!(effect.holds());
        }
    }
}
