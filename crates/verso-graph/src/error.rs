use thiserror::Error;

/// Errors from graph projection.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph session could not be opened or the write failed.
    #[error("graph write failed: {0}")]
    WriteFailed(String),
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
