use hypergraph_stats::prelude::*;

use proptest::proptest;
use std::collections::HashSet;

use super::strategy::{apply, arb_edits, arb_hypergraph};

proptest! {
    #[test]
    fn test_redundancy_is_a_fraction(h in arb_hypergraph(), edits in arb_edits(10)) {
        let mut h = h;
        apply(&mut h, &edits);

        let degree = h.node_degree();
        for (v, rc) in h.node_redundancy_coefficient() {
            assert!((0.0..=1.0).contains(&rc), "{v}: {rc}");
            if degree[&v] < 2 {
                assert_eq!(rc, 0.0);
            }
        }
    }

    #[test]
    fn test_matches_set_intersection(h in arb_hypergraph(), edits in arb_edits(10)) {
        let mut h = h;
        apply(&mut h, &edits);

        let dense = h.redundancy_coefficients();
        for n in h.node_ids() {
            assert_eq!(dense[n.0], redundancy_by_sets(&h, n));
        }
    }
}

// share-count over explicit member sets
fn redundancy_by_sets(h: &Hypergraph<u8>, v: NodeId) -> f64 {
    let incident = h.incidence(v);
    let d = incident.len();
    if d < 2 {
        return 0.0;
    }

    let mut shared = 0usize;
    for i in 0..d - 1 {
        let s1: HashSet<NodeId> = h.members(incident[i]).iter().copied().collect();
        for j in i + 1..d {
            let s2: HashSet<NodeId> = h.members(incident[j]).iter().copied().collect();
            if s1.intersection(&s2).any(|&u| u != v) {
                shared += 2;
            }
        }
    }
    shared as f64 / (d * (d - 1)) as f64
}

#[test]
fn test_degree_one_node_is_zero() {
    let h = Hypergraph::new(
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
    assert_eq!(h.node_redundancy_coefficient()[&5], 0.0);
}
