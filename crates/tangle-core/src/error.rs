//! Error types for tangle.
//!
//! One unified error type covers every recoverable condition in the crate.
//! Graph handle misuse (dangling handles, foreign handles, double removal)
//! is deliberately *not* represented here: those are programming errors and
//! panic at the call site instead of surfacing as values.

use crate::grid::Point2;
use thiserror::Error;

/// Result type alias for tangle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tangle operations.
///
/// Error codes follow the pattern `TANGLE-XXX` for easy debugging.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Grid created or resized with a negative dimension (TANGLE-001).
    #[error("[TANGLE-001] grid size {size} has a negative dimension")]
    InvalidSize {
        /// The rejected extent.
        size: Point2,
    },

    /// Grid access outside the current bounds (TANGLE-002).
    #[error("[TANGLE-002] index {pos} is out of grid size {size}")]
    OutOfBounds {
        /// The rejected coordinates.
        pos: Point2,
        /// The grid extent at the time of access.
        size: Point2,
    },
}

impl Error {
    /// Returns the error code (e.g., "TANGLE-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSize { .. } => "TANGLE-001",
            Self::OutOfBounds { .. } => "TANGLE-002",
        }
    }
}
