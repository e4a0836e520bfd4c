//! Error types for store operations.

use kinship_domain::GraphError;
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while saving or loading a family tree
#[derive(Error, Debug)]
pub enum StoreError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON or does not match the record schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record is well-formed JSON but cannot be interpreted
    #[error("Invalid record '{id}': {reason}")]
    InvalidFormat {
        /// Key or id of the offending record
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// Rebuilding the graph failed (missing reference, duplicate id, ...)
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

impl StoreError {
    pub(crate) fn invalid(id: impl ToString, reason: impl Into<String>) -> Self {
        StoreError::InvalidFormat {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// True if the failure was a reference to an unregistered node
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Graph(GraphError::NotFound(_)))
    }
}
