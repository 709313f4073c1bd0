use verso_types::Digest;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object was not found.
    #[error("object not found: {0}")]
    NotFound(Digest),

    /// An object already exists at this digest with *different* payload
    /// bytes. Either the hash function broke or serialization is
    /// non-deterministic; never retryable, never an overwrite.
    #[error("digest collision for {digest}: existing payload differs")]
    DigestCollision { digest: Digest },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
