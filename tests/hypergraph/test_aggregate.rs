use hypergraph_stats::prelude::*;

use proptest::proptest;
use std::collections::HashMap;

use super::strategy::{apply, arb_edits, arb_hypergraph};

proptest! {
    #[test]
    fn test_aggregate_is_class_mean(h in arb_hypergraph(), edits in arb_edits(10)) {
        let mut h = h;
        apply(&mut h, &edits);

        let degree = h.node_degree();
        let rc = h.node_redundancy_coefficient();

        let mut classes: HashMap<usize, Vec<f64>> = HashMap::new();
        for (v, k) in &degree {
            classes.entry(*k).or_default().push(rc[v]);
        }

        let ddrc = h.degree_dependent_node_redundancy_coefficient();
        assert_eq!(ddrc.len(), classes.len());
        for (k, values) in classes {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            assert!((ddrc[&k] - mean).abs() < 1e-12, "degree {k}");
        }
    }

    #[test]
    fn test_report_matches_queries(h in arb_hypergraph()) {
        let report = Report::compute(&h);
        assert_eq!(report.node_degree, h.node_degree());
        assert_eq!(report.hyperedge_size, h.hyperedge_size());
        assert_eq!(report.joint_degree, h.num_jnt_node_deg());
        assert_eq!(report.node_redundancy, h.node_redundancy_coefficient());
        assert_eq!(
            report.degree_dependent_redundancy,
            h.degree_dependent_node_redundancy_coefficient()
        );
    }
}

#[test]
fn test_report_survives_mutation() {
    let mut h = Hypergraph::new(vec!['a', 'b', 'c'], vec![vec!['a', 'b'], vec!['a', 'b', 'c']])
        .unwrap();
    let report = Report::compute(&h);

    h.remove_node_from_hyperedge(&'b', EdgeId(1)).unwrap();

    assert_eq!(report.node_degree[&'b'], 2);
    assert_eq!(report.node_redundancy[&'a'], 1.0);
    assert_eq!(h.node_degree()[&'b'], 1);
    assert_eq!(h.node_redundancy_coefficient()[&'a'], 0.0);
}
