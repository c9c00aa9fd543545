//! Identity types for graph elements.
//!
//! Identities are opaque, store-local tokens: monotonically increasing,
//! never reused after their element is removed. Nodes and edges draw from
//! independent counters, so the two kinds form separate sequences.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a node within one [`Digraph`](crate::Digraph).
///
/// Ordered by allocation: later nodes compare greater. An identity is
/// never reassigned after its node is removed, so a stale handle can never
/// silently resolve to an unrelated, newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) const ZERO: Self = Self(0);

    /// Returns the raw identity value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// The identity allocated after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Identity of an edge within one [`Digraph`](crate::Digraph).
///
/// Same ordering and non-reuse guarantees as [`NodeId`], drawn from an
/// independent counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    pub(crate) const ZERO: Self = Self(0);

    /// Returns the raw identity value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// The identity allocated after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Process-unique tag identifying one graph store instance.
///
/// Every handle carries the tag of the store that minted it; resolving a
/// handle against a store with a different tag is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct GraphId(u64);

impl GraphId {
    pub(crate) fn allocate() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
