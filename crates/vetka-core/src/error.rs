//! Error types for vetka-core.

use thiserror::Error;

/// Graph operation error types.
///
/// Every failure is synchronous and surfaced immediately to the caller; none
/// is retried internally and none is fatal. A failed operation leaves the
/// graph exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Insertion of a vertex identity that is already stored.
    #[error("vertex already exists in the graph")]
    DuplicateVertex,

    /// An operation referenced a vertex identity that is not stored.
    #[error("vertex does not exist in the graph")]
    UnknownVertex,

    /// Insertion of an edge whose (source, destination) pair already exists.
    #[error("edge already exists between the given vertices")]
    DuplicateEdge,

    /// Removal of an edge that does not exist.
    #[error("edge does not exist between the given vertices")]
    UnknownEdge,

    /// Edge insertion that would create a cycle in an acyclicity-enforcing
    /// graph. Carries the rollback guarantee: the tentative edge has been
    /// removed again by the time this is returned.
    #[error("edge insertion would create a cycle in an acyclic graph")]
    CycleViolation,
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
