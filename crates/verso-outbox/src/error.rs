use thiserror::Error;
use uuid::Uuid;

/// Errors from outbox operations.
#[derive(Debug, Error)]
pub enum OutboxError {
    /// The entry was not found.
    #[error("outbox entry not found: {0}")]
    NotFound(Uuid),

    /// The backing store rejected the write.
    #[error("outbox write failed: {0}")]
    WriteFailed(String),
}

/// Result alias for outbox operations.
pub type Result<T> = std::result::Result<T, OutboxError>;
