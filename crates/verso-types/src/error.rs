use thiserror::Error;

/// Errors produced by type-level operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid repository id: {0}")]
    InvalidRepoId(String),

    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
