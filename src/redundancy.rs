//! Node redundancy coefficient.
//!
//! See M. Latapy, C. Magnien, N. Del Vecchio, *Basic notions for the analysis of large
//! two-mode networks*, Social Networks 30 (2008).
//!
//! The redundancy coefficient of a node `v` of degree `d ≥ 2` is the fraction of pairs of
//! hyperedges incident to `v` which share at least one member other than `v`:
//!
//! ```text
//!   rc(v) = 2 · |{ (e1, e2) : e1 < e2 in elist[v], (E[e1] ∩ E[e2]) \ {v} ≠ ∅ }| / (d · (d − 1))
//! ```
//!
//! Nodes of degree 0 or 1 have coefficient 0.
use crate::incidence::Hypergraph;

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::HashMap;

use tracing::trace;

impl<V> Hypergraph<V> {
    /// Redundancy coefficient of every node, indexed by [`NodeId`](crate::incidence::NodeId).
    pub fn redundancy_coefficients(&self) -> Vec<f64> {
        trace!(nodes = self.num_nodes(), "computing redundancy coefficients");

        // stamp[u] == generation iff u is a member of the hyperedge currently marked
        let mut stamp = vec![0usize; self.num_nodes()];
        let mut generation = 0usize;

        self.node_ids()
            .map(|v| {
                let incident = self.incidence(v);
                let d = incident.len();
                if d < 2 {
                    return 0.0;
                }

                let mut shared = 0usize;
                for (i, &e1) in incident.iter().enumerate() {
                    generation += 1;
                    for u in self.members(e1) {
                        stamp[u.0] = generation;
                    }
                    for &e2 in &incident[i + 1..] {
                        if self
                            .members(e2)
                            .iter()
                            .any(|&u| u != v && stamp[u.0] == generation)
                        {
                            shared += 2;
                        }
                    }
                }

                shared as f64 / (d * (d - 1)) as f64
            })
            .collect()
    }
}

impl<V: Clone + Eq + Hash + Debug> Hypergraph<V> {
    /// Redundancy coefficient of each node, keyed by node identifier.
    pub fn node_redundancy_coefficient(&self) -> HashMap<V, f64> {
        self.node_ids()
            .zip(self.redundancy_coefficients())
            .map(|(n, rc)| (self.node(n).clone(), rc))
            .collect()
    }
}
