use thiserror::Error;

/// Failures reported by the mutating and constructing operations of a
/// [`Hypergraph`](crate::incidence::Hypergraph), and by
/// [`JointDegree::from_parts`](crate::joint_degree::JointDegree::from_parts).
///
/// Node identifiers are generic, so they are carried in their `Debug` rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HypergraphError {
    #[error("node {node} is not in the hypergraph")]
    UnknownNode { node: String },

    #[error("hyperedge index {index} out of range (hypergraph has {len} hyperedges)")]
    HyperedgeIndex { index: usize, len: usize },

    #[error("node {node} is not a member of hyperedge {hyperedge}")]
    Membership { node: String, hyperedge: usize },

    #[error("invalid joint degree matrix: {reason}")]
    InvalidJointDegree { reason: String },
}

impl HypergraphError {
    pub(crate) fn unknown_node<V: core::fmt::Debug>(v: &V) -> Self {
        HypergraphError::UnknownNode {
            node: format!("{v:?}"),
        }
    }

    pub(crate) fn membership<V: core::fmt::Debug>(v: &V, hyperedge: usize) -> Self {
        HypergraphError::Membership {
            node: format!("{v:?}"),
            hyperedge,
        }
    }
}

pub type Result<T> = std::result::Result<T, HypergraphError>;
