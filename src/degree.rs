//! Node degrees and hyperedge sizes.
use crate::incidence::{Hypergraph, NodeId};

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::{BTreeSet, HashMap};

impl<V> Hypergraph<V> {
    /// Degree of every node, indexed by [`NodeId`].
    pub fn degrees(&self) -> Vec<usize> {
        self.node_ids().map(|n| self.degree_of(n)).collect()
    }

    /// Number of hyperedges containing `n`, counting repeated membership.
    pub fn degree_of(&self, n: NodeId) -> usize {
        self.incidence(n).len()
    }

    /// Size of every hyperedge, indexed by [`EdgeId`](crate::incidence::EdgeId).
    pub fn hyperedge_size(&self) -> Vec<usize> {
        self.edge_ids().map(|e| self.members(e).len()).collect()
    }

    /// The set of degree values held by at least one node.
    pub fn observed_degrees(&self) -> BTreeSet<usize> {
        self.node_ids().map(|n| self.degree_of(n)).collect()
    }
}

impl<V: Clone + Eq + Hash + Debug> Hypergraph<V> {
    /// Number of hyperedges each node belongs to.
    pub fn node_degree(&self) -> HashMap<V, usize> {
        self.node_ids()
            .map(|n| (self.node(n).clone(), self.degree_of(n)))
            .collect()
    }
}
