use hypergraph_stats::prelude::*;

use proptest::proptest;

use super::strategy::{apply, arb_edits, arb_hypergraph};

proptest! {
    #[test]
    fn test_degree_is_incidence_length(h in arb_hypergraph(), edits in arb_edits(20)) {
        let mut h = h;
        apply(&mut h, &edits);

        let degree = h.node_degree();
        assert_eq!(degree.len(), h.num_nodes());
        for (v, k) in &degree {
            assert_eq!(*k, h.incident_hyperedges(v).unwrap().len());
        }
    }

    #[test]
    fn test_degree_sum_is_size_sum(h in arb_hypergraph(), edits in arb_edits(20)) {
        let mut h = h;
        apply(&mut h, &edits);

        let degree_sum: usize = h.node_degree().values().sum();
        let size_sum: usize = h.hyperedge_size().iter().sum();
        assert_eq!(degree_sum, size_sum);
    }

    #[test]
    fn test_observed_degrees_match_node_degree(h in arb_hypergraph()) {
        let observed = h.observed_degrees();
        for k in h.node_degree().values() {
            assert!(observed.contains(k));
        }
        assert!(observed.iter().all(|k| h.node_degree().values().any(|d| d == k)));
    }
}

#[test]
fn test_remove_and_readd_restores_degree() {
    let mut h = Hypergraph::new(
        vec![1, 2, 3, 4, 5],
        vec![
            vec![1, 2],
            vec![2, 3],
            vec![1, 2, 3],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4, 5],
        ],
    )
    .unwrap();

    let before = h.node_degree();
    h.remove_node_from_hyperedge(&1, EdgeId(0)).unwrap();
    h.add_node_to_hyperedge(&1, EdgeId(0)).unwrap();
    assert_eq!(h.node_degree(), before);
    assert_eq!(h.hyperedge_size(), vec![2, 2, 3, 4, 5]);
}
