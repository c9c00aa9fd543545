//! Stable, copyable handles into a graph store.
//!
//! A handle is a (store tag, identity) pair: it owns nothing and is freely
//! copyable and comparable. Handles stay valid across unrelated mutations
//! of the store and become dangling when their element is removed; using a
//! dangling handle, or a handle against a graph other than the one that
//! minted it, panics.
//!
//! Payload access goes through indexing: `graph[node]` and `graph[edge]`
//! give shared or mutable access to the stored payload.

use super::id::{EdgeId, GraphId, NodeId};
use super::store::Digraph;
use std::ops::{Index, IndexMut};

/// Handle to one node of one [`Digraph`].
///
/// Handles order by (store, identity), so handles from different graphs
/// still compare deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef {
    graph: GraphId,
    node: NodeId,
}

impl NodeRef {
    pub(crate) fn new(graph: GraphId, node: NodeId) -> Self {
        Self { graph, node }
    }

    pub(crate) fn graph(self) -> GraphId {
        self.graph
    }

    /// Identity of the referenced node.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.node
    }

    /// Handles to the edges arriving at this node, ordered by edge
    /// identity.
    ///
    /// # Panics
    ///
    /// Panics if this handle is dangling or belongs to a different graph.
    #[must_use]
    pub fn incoming_edges<N, E>(self, graph: &Digraph<N, E>) -> Vec<EdgeRef> {
        let id = graph.resolve_node(self);
        graph
            .node_record(id)
            .incoming()
            .iter()
            .map(|&edge| EdgeRef::new(self.graph, edge))
            .collect()
    }

    /// Handles to the edges leaving this node, ordered by edge identity.
    ///
    /// # Panics
    ///
    /// Panics if this handle is dangling or belongs to a different graph.
    #[must_use]
    pub fn outgoing_edges<N, E>(self, graph: &Digraph<N, E>) -> Vec<EdgeRef> {
        let id = graph.resolve_node(self);
        graph
            .node_record(id)
            .outgoing()
            .iter()
            .map(|&edge| EdgeRef::new(self.graph, edge))
            .collect()
    }

    /// For every incoming edge, the node it leaves from, ordered by the
    /// underlying edge identity.
    ///
    /// Not deduplicated: parallel edges yield their endpoint repeatedly,
    /// and a self-loop yields this node itself.
    ///
    /// # Panics
    ///
    /// Panics if this handle is dangling or belongs to a different graph.
    #[must_use]
    pub fn predecessors<N, E>(self, graph: &Digraph<N, E>) -> Vec<NodeRef> {
        let id = graph.resolve_node(self);
        graph
            .node_record(id)
            .incoming()
            .iter()
            .map(|&edge| NodeRef::new(self.graph, graph.edge_record(edge).source()))
            .collect()
    }

    /// For every outgoing edge, the node it arrives at, ordered by the
    /// underlying edge identity. Not deduplicated.
    ///
    /// # Panics
    ///
    /// Panics if this handle is dangling or belongs to a different graph.
    #[must_use]
    pub fn successors<N, E>(self, graph: &Digraph<N, E>) -> Vec<NodeRef> {
        let id = graph.resolve_node(self);
        graph
            .node_record(id)
            .outgoing()
            .iter()
            .map(|&edge| NodeRef::new(self.graph, graph.edge_record(edge).target()))
            .collect()
    }
}

/// Handle to one edge of one [`Digraph`].
///
/// Same ownership and validity rules as [`NodeRef`]. The endpoints of an
/// edge are fixed at creation; the handle can always resolve them while
/// the edge is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeRef {
    graph: GraphId,
    edge: EdgeId,
}

impl EdgeRef {
    pub(crate) fn new(graph: GraphId, edge: EdgeId) -> Self {
        Self { graph, edge }
    }

    pub(crate) fn graph(self) -> GraphId {
        self.graph
    }

    /// Identity of the referenced edge.
    #[must_use]
    pub fn id(self) -> EdgeId {
        self.edge
    }

    /// Handle to the node this edge leaves from.
    ///
    /// # Panics
    ///
    /// Panics if this handle is dangling or belongs to a different graph.
    #[must_use]
    pub fn source<N, E>(self, graph: &Digraph<N, E>) -> NodeRef {
        let id = graph.resolve_edge(self);
        NodeRef::new(self.graph, graph.edge_record(id).source())
    }

    /// Handle to the node this edge arrives at.
    ///
    /// # Panics
    ///
    /// Panics if this handle is dangling or belongs to a different graph.
    #[must_use]
    pub fn target<N, E>(self, graph: &Digraph<N, E>) -> NodeRef {
        let id = graph.resolve_edge(self);
        NodeRef::new(self.graph, graph.edge_record(id).target())
    }
}

impl<N, E> Index<NodeRef> for Digraph<N, E> {
    type Output = N;

    fn index(&self, node: NodeRef) -> &N {
        let id = self.resolve_node(node);
        self.node_record(id).data()
    }
}

impl<N, E> IndexMut<NodeRef> for Digraph<N, E> {
    fn index_mut(&mut self, node: NodeRef) -> &mut N {
        let id = self.resolve_node(node);
        self.node_record_mut(id).data_mut()
    }
}

impl<N, E> Index<EdgeRef> for Digraph<N, E> {
    type Output = E;

    fn index(&self, edge: EdgeRef) -> &E {
        let id = self.resolve_edge(edge);
        self.edge_record(id).data()
    }
}

impl<N, E> IndexMut<EdgeRef> for Digraph<N, E> {
    fn index_mut(&mut self, edge: EdgeRef) -> &mut E {
        let id = self.resolve_edge(edge);
        self.edge_record_mut(id).data_mut()
    }
}
