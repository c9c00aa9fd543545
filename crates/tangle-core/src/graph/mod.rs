//! Directed graph container with stable handles.
//!
//! This module provides the three cooperating types of the container:
//!
//! - [`Digraph`] - the store; sole owner of all node and edge records
//! - [`NodeRef`] / [`EdgeRef`] - copyable handles that identify one element
//!   within one specific store
//! - [`NodeId`] / [`EdgeId`] - the opaque, monotonically allocated
//!   identities backing the handles
//!
//! The store keeps a per-node adjacency index (incoming and outgoing edge
//! identity sets) exactly in sync with the edge table on every mutation,
//! and enforces that every live edge points at live nodes by cascading
//! node removal into the touching edges.
//!
//! # Example
//!
//! ```
//! use tangle_core::Digraph;
//!
//! let mut graph = Digraph::new();
//! let alice = graph.add_node("alice");
//! let bob = graph.add_node("bob");
//! graph.add_edge("knows", alice, bob);
//!
//! for edge in alice.outgoing_edges(&graph) {
//!     assert_eq!(graph[edge], "knows");
//!     assert_eq!(edge.target(&graph), bob);
//! }
//! ```

mod edge;
mod handle;
mod id;
mod node;
mod store;


pub use handle::{EdgeRef, NodeRef};
pub use id::{EdgeId, NodeId};
pub use store::Digraph;
