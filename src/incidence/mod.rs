//! The incidence store: nodes, hyperedges, and the node → hyperedge membership lists.
//!
//! A [`Hypergraph`] keeps two views of the same relation:
//!
//! ```text
//!   hyperedges  E[0] = [1, 2]        elist  1 → [0, 2]
//!               E[1] = [2, 3]               2 → [0, 1, 2]
//!               E[2] = [1, 2, 3]            3 → [1, 2]
//! ```
//!
//! Every occurrence of a node `v` in `E[i]` corresponds to exactly one entry `i` in
//! `elist[v]`. Construction builds both views at once, and the only mutations
//! ([`Hypergraph::add_node_to_hyperedge`] and [`Hypergraph::remove_node_from_hyperedge`])
//! update both sides within a single call.
//!
//! ```rust
//! use hypergraph_stats::incidence::{EdgeId, Hypergraph};
//!
//! let mut h = Hypergraph::new(vec![1, 2, 3], vec![vec![1, 2], vec![2, 3]]).unwrap();
//! assert_eq!(h.incident_hyperedges(&2).unwrap(), &[EdgeId(0), EdgeId(1)]);
//!
//! h.add_node_to_hyperedge(&3, EdgeId(0)).unwrap();
//! assert_eq!(h.hyperedge(EdgeId(0)).unwrap().collect::<Vec<_>>(), vec![&1, &2, &3]);
//! ```
mod store;

pub use store::*;
