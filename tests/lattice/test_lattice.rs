use partition_lattice::lattice::PartitionLattice;
use partition_lattice::partition::*;

use crate::partition::strategy::pair_strategy;

use proptest::{prop_assert, proptest};

#[test]
fn enumeration_counts() {
    assert_eq!(PartitionLattice::new(GroundSet::new(1..=4)).len(), 15);
    assert_eq!(PartitionLattice::new(GroundSet::new(['x', 'y'])).len(), 2);

    for n in 0..=6usize {
        let lattice = PartitionLattice::new(GroundSet::new(0..n));
        assert_eq!(lattice.len(), bell_number::<usize>(n));
        let by_rank: Vec<usize> = (0..n.max(1))
            .map(|rank| stirling2::<usize>(n, n - rank))
            .collect();
        assert_eq!(lattice.rank_sizes(), by_rank);
    }
}

#[test]
fn only_top_above_crossing_pairs() {
    let ground = GroundSet::new(1..=4);
    let lattice = PartitionLattice::new(ground.clone());
    let p = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]]).unwrap();
    let q = Partition::new(&ground, vec![vec![1, 3], vec![2, 4]]).unwrap();

    let uppers = lattice.upper_bounds(&p, &q);
    assert_eq!(uppers, vec![&Partition::indiscrete(&ground)]);

    let check = lattice.check_join(&p, &q).unwrap();
    assert!(check.is_bound);
    assert!(check.is_extremal);
    assert_eq!(check.candidates, 1);
}

#[test]
fn refinement_pairs_count() {
    // Comparable pairs in the lattice of partitions of a 3-element set:
    // bottom below 4 others, each atom below top.
    let lattice = PartitionLattice::new(GroundSet::new(0..3));
    assert_eq!(lattice.refinement_pairs().len(), 4 + 3);
}

proptest! {
    #[test]
    fn join_and_meet_checks_pass((ground, [p, q]) in pair_strategy(Some(5))) {
        let lattice = PartitionLattice::new(ground);

        let joined = lattice.check_join(&p, &q).expect("same ground set");
        prop_assert!(joined.is_bound && joined.is_extremal);
        prop_assert!(joined.candidates >= 1);
        prop_assert!(lattice.index_of(&joined.bound).is_some());

        let met = lattice.check_meet(&p, &q).expect("same ground set");
        prop_assert!(met.is_bound && met.is_extremal);
        prop_assert!(lattice.index_of(&met.bound).is_some());
    }
}
