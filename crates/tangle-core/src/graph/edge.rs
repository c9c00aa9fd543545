//! Edge records: payload plus fixed endpoints.

use super::id::{EdgeId, NodeId};

/// A stored edge. Source and target are set at creation and never change;
/// rewiring an edge means deleting it and creating a new one.
#[derive(Debug)]
pub(crate) struct EdgeRecord<E> {
    id: EdgeId,
    data: E,
    source: NodeId,
    target: NodeId,
}

impl<E> EdgeRecord<E> {
    pub(crate) fn new(id: EdgeId, data: E, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            data,
            source,
            target,
        }
    }

    pub(crate) fn id(&self) -> EdgeId {
        self.id
    }

    pub(crate) fn data(&self) -> &E {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }

    pub(crate) fn source(&self) -> NodeId {
        self.source
    }

    pub(crate) fn target(&self) -> NodeId {
        self.target
    }
}
