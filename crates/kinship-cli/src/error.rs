//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Loading or saving the tree failed
    #[error("Store error: {0}")]
    Store(#[from] kinship_store::StoreError),

    /// A graph operation was rejected
    #[error("{0}")]
    Graph(#[from] kinship_domain::GraphError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Date string not in YYYY-MM-DD form
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate {
        /// Text as typed
        input: String,
        /// What is wrong with it
        reason: String,
    },

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}
