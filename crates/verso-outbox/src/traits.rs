use uuid::Uuid;

use crate::entry::{OutboxEntry, OutboxStatus};
use crate::error::Result;

/// Append-only outbox with dispatcher-side drain helpers.
///
/// `publish` is the engine-facing half: an append with status `New`.
/// `fetch_new` and `mark` exist for the external dispatcher, which polls
/// `New` entries, delivers them, and records the outcome -- at-least-once,
/// so consumers must tolerate duplicates.
pub trait Outbox: Send + Sync {
    /// Append a side-effect intent with status [`OutboxStatus::New`].
    fn publish(&self, payload: serde_json::Value) -> Result<OutboxEntry>;

    /// Up to `limit` entries still in `New` state, oldest first.
    fn fetch_new(&self, limit: usize) -> Result<Vec<OutboxEntry>>;

    /// Record a delivery outcome for one entry.
    fn mark(&self, id: Uuid, status: OutboxStatus) -> Result<()>;
}
