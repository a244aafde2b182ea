use crate::error::{HypergraphError, Result};

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::HashMap;

use tracing::{debug, trace};

/// Dense index of a node, assigned in order of first appearance at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// Stable positional index of a hyperedge. Never reused or compacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub usize);

/// A hypergraph over node identifiers of type `V`.
///
/// Node identifiers are interned to [`NodeId`]s; hyperedges and incidence lists are stored
/// in terms of those ids so that metrics can use flat arrays instead of hash lookups.
#[derive(Debug, Clone)]
pub struct Hypergraph<V> {
    /// Node identifiers. Defines a finite map from [`NodeId`] to identifier.
    nodes: Vec<V>,

    /// Inverse of `nodes`.
    index: HashMap<V, NodeId>,

    /// Ordered members of each hyperedge. Duplicates are kept if supplied.
    hyperedges: Vec<Vec<NodeId>>,

    /// For each node, the hyperedges it belongs to, once per occurrence.
    elist: Vec<Vec<EdgeId>>,
}

impl<V> Hypergraph<V> {
    /// The empty hypergraph with no nodes and no hyperedges.
    pub fn empty() -> Self {
        Hypergraph {
            nodes: vec![],
            index: HashMap::new(),
            hyperedges: vec![],
            elist: vec![],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_hyperedges(&self) -> usize {
        self.hyperedges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.hyperedges.is_empty()
    }

    /// Node identifiers in [`NodeId`] order.
    pub fn nodes(&self) -> &[V] {
        &self.nodes
    }

    /// The identifier of node `n`.
    pub fn node(&self, n: NodeId) -> &V {
        &self.nodes[n.0]
    }

    /// Members of hyperedge `e` as [`NodeId`]s, in insertion order.
    pub fn members(&self, e: EdgeId) -> &[NodeId] {
        &self.hyperedges[e.0]
    }

    /// Hyperedges containing node `n`, once per occurrence, in insertion order.
    pub fn incidence(&self, n: NodeId) -> &[EdgeId] {
        &self.elist[n.0]
    }

    /// Iterate over all [`NodeId`]s.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Iterate over all [`EdgeId`]s.
    pub fn edge_ids(&self) -> impl ExactSizeIterator<Item = EdgeId> {
        (0..self.hyperedges.len()).map(EdgeId)
    }

    /// The identifiers of hyperedge `e`, or `None` if `e` is out of range.
    pub fn hyperedge(&self, e: EdgeId) -> Option<impl ExactSizeIterator<Item = &V> + '_> {
        self.hyperedges
            .get(e.0)
            .map(|members| members.iter().map(|n| &self.nodes[n.0]))
    }

    fn check_edge(&self, e: EdgeId) -> Result<()> {
        if e.0 < self.hyperedges.len() {
            Ok(())
        } else {
            Err(HypergraphError::HyperedgeIndex {
                index: e.0,
                len: self.hyperedges.len(),
            })
        }
    }
}

impl<V: Clone> Hypergraph<V> {
    /// Copy the hyperedges out as lists of identifiers.
    pub fn to_hyperedges(&self) -> Vec<Vec<V>> {
        self.hyperedges
            .iter()
            .map(|members| members.iter().map(|n| self.nodes[n.0].clone()).collect())
            .collect()
    }
}

impl<V: Clone + Eq + Hash + Debug> Hypergraph<V> {
    /// Build a hypergraph from a list of nodes and a list of hyperedges.
    ///
    /// A node listed more than once in `nodes` is a single node.
    /// Every identifier in `hyperedges` must appear in `nodes`, or
    /// [`HypergraphError::UnknownNode`] is returned.
    pub fn new<N, E, H>(nodes: N, hyperedges: E) -> Result<Self>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = H>,
        H: IntoIterator<Item = V>,
    {
        let mut h = Self::empty();
        for v in nodes {
            h.intern(v);
        }

        for (i, edge) in hyperedges.into_iter().enumerate() {
            let members = edge
                .into_iter()
                .map(|v| h.node_id(&v).ok_or_else(|| HypergraphError::unknown_node(&v)))
                .collect::<Result<Vec<NodeId>>>()
                .inspect_err(|err| debug!(hyperedge = i, %err, "rejected hypergraph"))?;

            for n in &members {
                h.elist[n.0].push(EdgeId(i));
            }
            h.hyperedges.push(members);
        }

        debug!(
            nodes = h.nodes.len(),
            hyperedges = h.hyperedges.len(),
            "constructed hypergraph"
        );
        Ok(h)
    }

    /// Replace the contents of this hypergraph with `(nodes, hyperedges)`.
    ///
    /// On error `self` is left as it was.
    pub fn construct<N, E, H>(&mut self, nodes: N, hyperedges: E) -> Result<()>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = H>,
        H: IntoIterator<Item = V>,
    {
        *self = Self::new(nodes, hyperedges)?;
        Ok(())
    }

    fn intern(&mut self, v: V) -> NodeId {
        if let Some(&n) = self.index.get(&v) {
            return n;
        }
        let n = NodeId(self.nodes.len());
        self.index.insert(v.clone(), n);
        self.nodes.push(v);
        self.elist.push(vec![]);
        n
    }

    pub fn node_id(&self, v: &V) -> Option<NodeId> {
        self.index.get(v).copied()
    }

    pub fn contains_node(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Hyperedges containing `v`, once per occurrence, in insertion order.
    pub fn incident_hyperedges(&self, v: &V) -> Result<&[EdgeId]> {
        let n = self
            .node_id(v)
            .ok_or_else(|| HypergraphError::unknown_node(v))?;
        Ok(self.incidence(n))
    }

    fn resolve(&self, v: &V, e: EdgeId) -> Result<NodeId> {
        let n = self
            .node_id(v)
            .ok_or_else(|| HypergraphError::unknown_node(v))?;
        self.check_edge(e)?;
        Ok(n)
    }

    /// Append `v` to hyperedge `e` and `e` to the incidence list of `v`.
    ///
    /// There is no duplicate check: adding twice records two memberships.
    pub fn add_node_to_hyperedge(&mut self, v: &V, e: EdgeId) -> Result<()> {
        let n = self
            .resolve(v, e)
            .inspect_err(|err| debug!(%err, "rejected add_node_to_hyperedge"))?;

        self.hyperedges[e.0].push(n);
        self.elist[n.0].push(e);
        trace!(node = ?v, hyperedge = e.0, "added node to hyperedge");
        Ok(())
    }

    /// Remove one occurrence of `v` from hyperedge `e`, and one occurrence of `e` from the
    /// incidence list of `v`. The first match is removed on each side.
    pub fn remove_node_from_hyperedge(&mut self, v: &V, e: EdgeId) -> Result<()> {
        let n = self
            .resolve(v, e)
            .inspect_err(|err| debug!(%err, "rejected remove_node_from_hyperedge"))?;

        let in_elist = self.elist[n.0].iter().position(|&x| x == e);
        let in_edge = self.hyperedges[e.0].iter().position(|&x| x == n);

        match (in_elist, in_edge) {
            (Some(i), Some(j)) => {
                self.elist[n.0].remove(i);
                self.hyperedges[e.0].remove(j);
                trace!(node = ?v, hyperedge = e.0, "removed node from hyperedge");
                Ok(())
            }
            _ => {
                let err = HypergraphError::membership(v, e.0);
                debug!(%err, "rejected remove_node_from_hyperedge");
                Err(err)
            }
        }
    }
}

impl<V> Default for Hypergraph<V> {
    fn default() -> Self {
        Self::empty()
    }
}
