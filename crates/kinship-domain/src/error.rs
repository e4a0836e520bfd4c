//! Errors raised by family graph operations

use crate::{NodeId, NodeKind};
use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Structural errors from the family graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No node is registered under this id
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    /// A pairing was not given exactly two distinct members
    #[error("A pairing needs exactly {expected} distinct members, got {actual}")]
    InvalidCardinality {
        /// Required member count
        expected: usize,
        /// Distinct members supplied
        actual: usize,
    },

    /// A node is already registered under this id
    #[error("Duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// The id names (or by parity would name) the wrong kind of node
    #[error("Node {id} has the wrong kind; expected {expected}")]
    KindMismatch {
        /// Offending id
        id: NodeId,
        /// Kind the operation required
        expected: NodeKind,
    },

    /// The child already descends from another parent
    #[error("Node {child} already descends from {existing}; cannot also descend from {requested}")]
    ParentConflict {
        /// Child being attached
        child: NodeId,
        /// Parent currently recorded
        existing: NodeId,
        /// Parent requested
        requested: NodeId,
    },

    /// Every identifier of this kind has been used
    #[error("No {0} ids left to allocate")]
    IdSpaceExhausted(NodeKind),
}
