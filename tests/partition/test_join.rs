use partition_lattice::lattice::PartitionLattice;
use partition_lattice::partition::*;

use super::strategy::{pair_strategy, partition_strategy, triple_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

#[test]
fn scenario_crossing_pairs() {
    let ground = GroundSet::new(1..=4);
    let p = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]]).unwrap();
    let q = Partition::new(&ground, vec![vec![1, 3], vec![2, 4]]).unwrap();

    let pq = join(&p, &q, &ground).unwrap();
    assert_eq!(pq.blocks(), &[vec![1, 2, 3, 4]]);
}

proptest! {
    #[test]
    fn join_is_upper_bound((ground, [p, q]) in pair_strategy(None)) {
        let pq = join(&p, &q, &ground).expect("same ground set");
        prop_assert_eq!(refines(&p, &pq, &ground), Ok(true));
        prop_assert_eq!(refines(&q, &pq, &ground), Ok(true));
    }

    #[test]
    fn join_is_least_upper_bound((ground, [p, q]) in pair_strategy(Some(5))) {
        let pq = join(&p, &q, &ground).expect("same ground set");
        let lattice = PartitionLattice::new(ground);
        for c in lattice.upper_bounds(&p, &q) {
            prop_assert!(&pq <= c);
        }
    }

    #[test]
    fn join_idempotent((ground, p) in partition_strategy()) {
        prop_assert_eq!(join(&p, &p, &ground), Ok(p));
    }

    #[test]
    fn join_commutative((ground, [p, q]) in pair_strategy(None)) {
        prop_assert_eq!(join(&p, &q, &ground), join(&q, &p, &ground));
    }

    #[test]
    fn join_associative((ground, [p, q, r]) in triple_strategy()) {
        let pq_r = join(&join(&p, &q, &ground).unwrap(), &r, &ground);
        let p_qr = join(&p, &join(&q, &r, &ground).unwrap(), &ground);
        prop_assert_eq!(pq_r, p_qr);
    }

    #[test]
    fn join_is_coarser_input_when_comparable((ground, [p, q]) in pair_strategy(None)) {
        let pq = join(&p, &q, &ground).expect("same ground set");
        prop_assert_eq!(pq == q, p <= q);
    }

    #[test]
    fn meet_is_greatest_lower_bound((ground, [p, q]) in pair_strategy(Some(5))) {
        let pq = meet(&p, &q, &ground).expect("same ground set");
        prop_assert!(pq <= p && pq <= q);
        let lattice = PartitionLattice::new(ground);
        for c in lattice.lower_bounds(&p, &q) {
            prop_assert!(c <= &pq);
        }
    }

    #[test]
    fn absorption((ground, [p, q]) in pair_strategy(None)) {
        let p_and_q = meet(&p, &q, &ground).unwrap();
        prop_assert_eq!(join(&p, &p_and_q, &ground), Ok(p.clone()));
        let p_or_q = join(&p, &q, &ground).unwrap();
        prop_assert_eq!(meet(&p, &p_or_q, &ground), Ok(p));
    }

    #[test]
    fn method_join_matches_free_function((ground, [p, q]) in pair_strategy(None)) {
        prop_assert_eq!(p.join(&q), join(&p, &q, &ground));
        prop_assert_eq!(p.meet(&q), meet(&p, &q, &ground));
    }
}
