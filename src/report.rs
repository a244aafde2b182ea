//! Every descriptor of a [`Hypergraph`], computed from one borrow of the store.
use crate::incidence::Hypergraph;
use crate::joint_degree::JointDegree;

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

/// A frozen set of statistics. Holding a `Report` does not borrow the hypergraph, so the
/// store may be mutated afterwards without invalidating it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "V: serde::Serialize + serde::de::DeserializeOwned + Eq + Hash")
)]
pub struct Report<V> {
    pub node_degree: HashMap<V, usize>,
    pub hyperedge_size: Vec<usize>,
    pub joint_degree: JointDegree,
    pub node_redundancy: HashMap<V, f64>,
    pub degree_dependent_redundancy: BTreeMap<usize, f64>,
}

// NOTE: manual PartialEq required because the HashMap fields need `V: Eq + Hash`.
impl<V: Eq + Hash> PartialEq for Report<V> {
    fn eq(&self, other: &Self) -> bool {
        self.node_degree == other.node_degree
            && self.hyperedge_size == other.hyperedge_size
            && self.joint_degree == other.joint_degree
            && self.node_redundancy == other.node_redundancy
            && self.degree_dependent_redundancy == other.degree_dependent_redundancy
    }
}

impl<V: Clone + Eq + Hash + Debug> Report<V> {
    pub fn compute(h: &Hypergraph<V>) -> Self {
        let degrees = h.degrees();
        let rc = h.redundancy_coefficients();

        let node_degree = h
            .node_ids()
            .map(|n| (h.node(n).clone(), degrees[n.0]))
            .collect();
        let node_redundancy = h
            .node_ids()
            .map(|n| (h.node(n).clone(), rc[n.0]))
            .collect();
        let degree_dependent_redundancy = crate::aggregate::class_mean(
            degrees.iter().copied(),
            degrees.iter().copied().zip(rc.iter().copied()),
        );

        debug!(
            nodes = h.num_nodes(),
            hyperedges = h.num_hyperedges(),
            "computed hypergraph report"
        );

        Report {
            node_degree,
            hyperedge_size: h.hyperedge_size(),
            joint_degree: h.num_jnt_node_deg(),
            node_redundancy,
            degree_dependent_redundancy,
        }
    }
}
