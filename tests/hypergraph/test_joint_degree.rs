use proptest::proptest;

use super::strategy::{apply, arb_edits, arb_hypergraph};

proptest! {
    #[test]
    fn test_joint_degree_is_symmetric(h in arb_hypergraph(), edits in arb_edits(10)) {
        let mut h = h;
        apply(&mut h, &edits);

        let jnd = h.num_jnt_node_deg();
        for (k1, k2, c) in jnd.iter() {
            assert_eq!(jnd.get(k2, k1), Some(c));
        }
    }

    #[test]
    fn test_joint_degree_total_counts_pairs(h in arb_hypergraph()) {
        let pairs: usize = h
            .hyperedge_size()
            .iter()
            .map(|&s| s * s.saturating_sub(1) / 2)
            .sum();
        assert_eq!(h.num_jnt_node_deg().total(), 2 * pairs);
    }

    #[test]
    fn test_joint_degree_keys_are_observed_degrees(h in arb_hypergraph()) {
        let jnd = h.num_jnt_node_deg();
        let observed: Vec<usize> = h.observed_degrees().into_iter().collect();
        assert_eq!(jnd.degrees(), observed.as_slice());
        assert_eq!(jnd.iter().count(), observed.len() * observed.len());
    }
}
