use partition_lattice::partition::*;

use super::strategy::{pair_strategy, partition_strategy, triple_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn reflexivity((ground, p) in partition_strategy()) {
        prop_assert_eq!(refines(&p, &p, &ground), Ok(true));
        prop_assert!(p <= p);
    }

    #[test]
    fn antisymmetry((ground, [p, q]) in pair_strategy(None)) {
        let pq = refines(&p, &q, &ground).expect("same ground set");
        let qp = refines(&q, &p, &ground).expect("same ground set");
        if pq && qp {
            prop_assert_eq!(p, q);
        }
    }

    #[test]
    fn transitivity((ground, [p, q, r]) in triple_strategy()) {
        let pq = refines(&p, &q, &ground).expect("same ground set");
        let qr = refines(&q, &r, &ground).expect("same ground set");
        if pq && qr {
            prop_assert_eq!(refines(&p, &r, &ground), Ok(true));
        }
    }

    #[test]
    fn bounded((ground, p) in partition_strategy()) {
        prop_assert!(Partition::discrete(&ground) <= p);
        prop_assert!(p <= Partition::indiscrete(&ground));
    }

    #[test]
    fn operator_agrees_with_refines((ground, [p, q]) in pair_strategy(None)) {
        let expected = refines(&p, &q, &ground).expect("same ground set");
        prop_assert_eq!(p <= q, expected);
        prop_assert_eq!(p.refines(&q), expected);
    }

    #[test]
    fn blocks_of_coarser_are_unions((ground, [p, q]) in pair_strategy(None)) {
        // P ≤ Q iff every block of Q is a union of blocks of P.
        let unions = q.blocks().iter().all(|b| {
            let covered: usize = p
                .blocks()
                .iter()
                .filter(|a| a.iter().all(|x| b.contains(x)))
                .map(Vec::len)
                .sum();
            covered == b.len()
        });
        prop_assert_eq!(refines(&p, &q, &ground), Ok(unions));
    }

    #[test]
    fn rank_strictly_increases((_ground, [p, q]) in pair_strategy(None)) {
        if p < q {
            prop_assert!(p.rank() < q.rank());
        }
    }
}
