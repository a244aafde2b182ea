//! # Hypergraph Statistics
//!
//! A [`Hypergraph`](crate::incidence::Hypergraph) is a set of nodes together with a list of
//! *hyperedges*: ordered collections of nodes of any size. Hypergraphs model multi-way
//! relations, such as authors of a paper or members of a group, which a plain graph can only
//! represent by losing information.
//!
//! This crate computes the structural descriptors used in network-science analysis of such
//! data:
//!
//! | descriptor | method |
//! |------------|--------|
//! | node degree | [`node_degree`](crate::incidence::Hypergraph::node_degree) |
//! | hyperedge size | [`hyperedge_size`](crate::incidence::Hypergraph::hyperedge_size) |
//! | joint degree | [`num_jnt_node_deg`](crate::incidence::Hypergraph::num_jnt_node_deg) |
//! | redundancy coefficient | [`node_redundancy_coefficient`](crate::incidence::Hypergraph::node_redundancy_coefficient) |
//! | degree-dependent redundancy | [`degree_dependent_node_redundancy_coefficient`](crate::incidence::Hypergraph::degree_dependent_node_redundancy_coefficient) |
//!
//! # Example
//!
//! ```rust
//! use hypergraph_stats::prelude::*;
//!
//! let h = Hypergraph::new(
//!     vec![1, 2, 3, 4, 5],
//!     vec![
//!         vec![1, 2],
//!         vec![2, 3],
//!         vec![1, 2, 3],
//!         vec![1, 2, 3, 4],
//!         vec![1, 2, 3, 4, 5],
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(h.node_degree()[&2], 5);
//! assert_eq!(h.hyperedge_size(), vec![2, 2, 3, 4, 5]);
//! assert_eq!(h.node_redundancy_coefficient()[&5], 0.0);
//! assert_eq!(h.num_jnt_node_deg().get(4, 4), Some(6));
//! ```
//!
//! # Mutation
//!
//! After construction, membership can be edited with
//! [`add_node_to_hyperedge`](crate::incidence::Hypergraph::add_node_to_hyperedge) and
//! [`remove_node_from_hyperedge`](crate::incidence::Hypergraph::remove_node_from_hyperedge).
//! Both return a [`HypergraphError`](crate::error::HypergraphError) instead of modifying the
//! store when their arguments are invalid.
//! Queries take `&self` and mutations take `&mut self`, so a query always sees one consistent
//! state. Use [`Report`](crate::report::Report) to keep all descriptors of a given state
//! around while continuing to edit.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for ids, [`JointDegree`](crate::joint_degree::JointDegree)
//!   and [`Report`](crate::report::Report).

pub mod error;
pub mod incidence;

pub mod aggregate;
pub mod degree;
pub mod joint_degree;
pub mod redundancy;

pub mod report;

pub mod prelude {
    //! The commonly used types.
    pub use crate::error::HypergraphError;
    pub use crate::incidence::{EdgeId, Hypergraph, NodeId};
    pub use crate::joint_degree::JointDegree;
    pub use crate::report::Report;
}
