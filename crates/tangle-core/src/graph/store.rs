//! The graph store: sole owner of all node and edge records.

use super::edge::EdgeRecord;
use super::handle::{EdgeRef, NodeRef};
use super::id::{EdgeId, GraphId, NodeId};
use super::node::NodeRecord;
use std::collections::BTreeMap;

/// A directed graph container with caller-supplied payloads.
///
/// The store owns every node and edge record, assigns identities, and
/// maintains the per-node adjacency index. All navigation and payload
/// access goes through [`NodeRef`]/[`EdgeRef`] handles returned by the
/// mutation and query methods; the handles themselves hold no data.
///
/// Identities are allocated from monotonic per-store counters and are
/// never reused, even after removal. Both element tables are keyed and
/// iterated in ascending identity order, so enumeration and lookup are
/// deterministic.
///
/// The store is single-threaded by design: every operation completes
/// before returning and there is no interior locking. Wrap a store in a
/// mutex if it must be shared across threads.
///
/// # Example
///
/// ```
/// use tangle_core::Digraph;
///
/// let mut graph = Digraph::new();
/// let a = graph.add_node(1);
/// let b = graph.add_node(2);
/// let e = graph.add_edge("a->b", a, b);
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph[a] + graph[b], 3);
/// assert_eq!(e.target(&graph), b);
/// ```
#[derive(Debug)]
pub struct Digraph<N, E> {
    tag: GraphId,
    nodes: BTreeMap<NodeId, NodeRecord<N>>,
    edges: BTreeMap<EdgeId, EdgeRecord<E>>,
    next_node_id: NodeId,
    next_edge_id: EdgeId,
}

impl<N, E> Default for Digraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Digraph<N, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: GraphId::allocate(),
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_node_id: NodeId::ZERO,
            next_edge_id: EdgeId::ZERO,
        }
    }

    /// Adds a node holding `data` and returns a handle to it.
    ///
    /// The node starts with empty adjacency; its identity is the next
    /// unused node identity of this store.
    pub fn add_node(&mut self, data: N) -> NodeRef {
        let id = self.next_node_id;
        self.next_node_id = id.next();
        self.nodes.insert(id, NodeRecord::new(id, data));
        tracing::trace!(node = id.as_u64(), "node added");
        NodeRef::new(self.tag, id)
    }

    /// Adds an edge holding `data` from `source` to `target` and returns a
    /// handle to it.
    ///
    /// The new edge identity is registered in the source node's outgoing
    /// set and the target node's incoming set in the same step. Parallel
    /// edges and self-loops are permitted.
    ///
    /// # Panics
    ///
    /// Panics if either handle belongs to a different graph or refers to a
    /// removed node. Both handles are checked before any state changes.
    pub fn add_edge(&mut self, data: E, source: NodeRef, target: NodeRef) -> EdgeRef {
        let source_id = self.resolve_node(source);
        let target_id = self.resolve_node(target);

        let id = self.next_edge_id;
        self.next_edge_id = id.next();
        self.edges
            .insert(id, EdgeRecord::new(id, data, source_id, target_id));
        self.node_record_mut(source_id).add_outgoing(id);
        self.node_record_mut(target_id).add_incoming(id);
        tracing::trace!(
            edge = id.as_u64(),
            source = source_id.as_u64(),
            target = target_id.as_u64(),
            "edge added"
        );
        EdgeRef::new(self.tag, id)
    }

    /// Removes an edge, pruning it from both endpoints' adjacency sets.
    ///
    /// Every handle to this edge becomes dangling. The identity is not
    /// reused.
    ///
    /// # Panics
    ///
    /// Panics if the handle belongs to a different graph or the edge was
    /// already removed. Double removal is a contract violation, not a
    /// no-op.
    pub fn remove_edge(&mut self, edge: EdgeRef) {
        let id = self.resolve_edge(edge);
        self.remove_edge_by_id(id);
    }

    fn remove_edge_by_id(&mut self, id: EdgeId) {
        let record = self.edge_record(id);
        let (source, target) = (record.source(), record.target());
        self.node_record_mut(source).remove_outgoing(id);
        self.node_record_mut(target).remove_incoming(id);
        self.edges.remove(&id);
        tracing::trace!(edge = id.as_u64(), "edge removed");
    }

    /// Removes a node and, first, every edge touching it.
    ///
    /// Each touching edge goes through the same path as [`remove_edge`],
    /// so the *other* endpoint of each edge has its adjacency set pruned
    /// too. Every handle to the node and to any cascaded edge becomes
    /// dangling; none of the identities are reused.
    ///
    /// [`remove_edge`]: Self::remove_edge
    ///
    /// # Panics
    ///
    /// Panics if the handle belongs to a different graph or the node was
    /// already removed.
    pub fn remove_node(&mut self, node: NodeRef) {
        let id = self.resolve_node(node);

        // The cascade mutates the adjacency sets it walks, so the edge ids
        // are copied out first. Incoming edges go before outgoing ones; a
        // self-loop is gone from the outgoing set by the time that set is
        // snapshotted, so it cannot be removed twice.
        let incoming: Vec<EdgeId> = self.node_record(id).incoming().iter().copied().collect();
        for edge in incoming {
            self.remove_edge_by_id(edge);
        }
        let outgoing: Vec<EdgeId> = self.node_record(id).outgoing().iter().copied().collect();
        for edge in outgoing {
            self.remove_edge_by_id(edge);
        }

        self.nodes.remove(&id);
        tracing::trace!(node = id.as_u64(), "node removed");
    }

    /// Finds the first node whose payload equals `data`.
    ///
    /// Live nodes are scanned in ascending identity order; returns `None`
    /// when no payload matches.
    #[must_use]
    pub fn find_node(&self, data: &N) -> Option<NodeRef>
    where
        N: PartialEq,
    {
        self.nodes
            .values()
            .find(|record| record.data() == data)
            .map(|record| NodeRef::new(self.tag, record.id()))
    }

    /// Finds the first edge whose payload equals `data`.
    ///
    /// Same contract as [`find_node`](Self::find_node).
    #[must_use]
    pub fn find_edge(&self, data: &E) -> Option<EdgeRef>
    where
        E: PartialEq,
    {
        self.edges
            .values()
            .find(|record| record.data() == data)
            .map(|record| EdgeRef::new(self.tag, record.id()))
    }

    /// Returns handles to every live node, in ascending identity order.
    ///
    /// The result is a snapshot: mutating the graph afterwards does not
    /// change it, though handles inside it dangle once their node is
    /// removed.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeRef> {
        self.nodes
            .keys()
            .map(|&id| NodeRef::new(self.tag, id))
            .collect()
    }

    /// Returns handles to every live edge, in ascending identity order.
    ///
    /// Snapshot semantics as for [`nodes`](Self::nodes).
    #[must_use]
    pub fn edges(&self) -> Vec<EdgeRef> {
        self.edges
            .keys()
            .map(|&id| EdgeRef::new(self.tag, id))
            .collect()
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph holds no nodes (and therefore no edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if the handle was minted by this graph and its node is
    /// still live. Never panics; use this to probe a possibly-dangling
    /// handle.
    #[must_use]
    pub fn contains_node(&self, node: NodeRef) -> bool {
        node.graph() == self.tag && self.nodes.contains_key(&node.id())
    }

    /// Returns true if the handle was minted by this graph and its edge is
    /// still live.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeRef) -> bool {
        edge.graph() == self.tag && self.edges.contains_key(&edge.id())
    }

    // ---- resolution shared with the handle API ----

    /// Validates provenance and liveness of a node handle.
    pub(crate) fn resolve_node(&self, node: NodeRef) -> NodeId {
        assert!(
            node.graph() == self.tag,
            "node handle {node:?} does not belong to this graph"
        );
        assert!(
            self.nodes.contains_key(&node.id()),
            "node handle {node:?} is dangling: the node was removed"
        );
        node.id()
    }

    /// Validates provenance and liveness of an edge handle.
    pub(crate) fn resolve_edge(&self, edge: EdgeRef) -> EdgeId {
        assert!(
            edge.graph() == self.tag,
            "edge handle {edge:?} does not belong to this graph"
        );
        assert!(
            self.edges.contains_key(&edge.id()),
            "edge handle {edge:?} is dangling: the edge was removed"
        );
        edge.id()
    }

    pub(crate) fn node_record(&self, id: NodeId) -> &NodeRecord<N> {
        self.nodes
            .get(&id)
            .unwrap_or_else(|| panic!("node {id:?} is not alive in this graph"))
    }

    pub(crate) fn node_record_mut(&mut self, id: NodeId) -> &mut NodeRecord<N> {
        self.nodes
            .get_mut(&id)
            .unwrap_or_else(|| panic!("node {id:?} is not alive in this graph"))
    }

    pub(crate) fn edge_record(&self, id: EdgeId) -> &EdgeRecord<E> {
        self.edges
            .get(&id)
            .unwrap_or_else(|| panic!("edge {id:?} is not alive in this graph"))
    }

    pub(crate) fn edge_record_mut(&mut self, id: EdgeId) -> &mut EdgeRecord<E> {
        self.edges
            .get_mut(&id)
            .unwrap_or_else(|| panic!("edge {id:?} is not alive in this graph"))
    }
}
