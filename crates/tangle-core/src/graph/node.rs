//! Node records: payload plus adjacency bookkeeping.

use super::id::{EdgeId, NodeId};
use std::collections::BTreeSet;

/// A stored node: one payload plus the identity sets of the edges touching
/// it. The store keeps both sets exactly equal to the edge table on every
/// mutation; nothing outside this module can reach them.
#[derive(Debug)]
pub(crate) struct NodeRecord<N> {
    id: NodeId,
    data: N,
    /// Edges whose target is this node, ordered by identity.
    incoming: BTreeSet<EdgeId>,
    /// Edges whose source is this node, ordered by identity.
    outgoing: BTreeSet<EdgeId>,
}

impl<N> NodeRecord<N> {
    pub(crate) fn new(id: NodeId, data: N) -> Self {
        Self {
            id,
            data,
            incoming: BTreeSet::new(),
            outgoing: BTreeSet::new(),
        }
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    pub(crate) fn data(&self) -> &N {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut N {
        &mut self.data
    }

    pub(crate) fn incoming(&self) -> &BTreeSet<EdgeId> {
        &self.incoming
    }

    pub(crate) fn outgoing(&self) -> &BTreeSet<EdgeId> {
        &self.outgoing
    }

    pub(crate) fn add_incoming(&mut self, edge: EdgeId) {
        self.incoming.insert(edge);
    }

    pub(crate) fn add_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.insert(edge);
    }

    pub(crate) fn remove_incoming(&mut self, edge: EdgeId) {
        self.incoming.remove(&edge);
    }

    pub(crate) fn remove_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.remove(&edge);
    }
}
