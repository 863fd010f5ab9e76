//! Error types for the spanpath CLI.

use spanpath_graph::GraphError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error raised by a graph operation.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line value.
    #[error("Validation failed: {0}")]
    Validation(String),
}
