use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery state of an outbox entry.
///
/// The engine only ever writes `New`; the external dispatcher owns the
/// other transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutboxStatus {
    /// Freshly published, awaiting the dispatcher.
    New,
    /// Delivered downstream.
    Dispatched,
    /// Delivery gave up after retries.
    Failed,
}

impl std::fmt::Display for OutboxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::Dispatched => write!(f, "DISPATCHED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// A durable side-effect intent, appended synchronously with the primary
/// write and consumed asynchronously.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxEntry {
    /// Entry id (UUID v7, time-ordered).
    pub id: Uuid,
    /// Arbitrary JSON describing the side effect.
    pub payload: serde_json::Value,
    /// Delivery state.
    pub status: OutboxStatus,
    /// When the entry was published.
    pub created_at: DateTime<Utc>,
}

impl OutboxEntry {
    /// Create a fresh entry with status [`OutboxStatus::New`].
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::now_v7(),
            payload,
            status: OutboxStatus::New,
            created_at: Utc::now(),
        }
    }
}
