use std::sync::RwLock;

use uuid::Uuid;

use crate::entry::{OutboxEntry, OutboxStatus};
use crate::error::{OutboxError, Result};
use crate::traits::Outbox;

/// In-memory outbox for tests and embedding. Entries live in a `Vec` in
/// publish order behind a `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryOutbox {
    entries: RwLock<Vec<OutboxEntry>>,
}

impl InMemoryOutbox {
    /// Create a new empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries ever published.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

impl Outbox for InMemoryOutbox {
    fn publish(&self, payload: serde_json::Value) -> Result<OutboxEntry> {
        let entry = OutboxEntry::new(payload);
        tracing::debug!(id = %entry.id, "published outbox entry");
        self.entries
            .write()
            .expect("lock poisoned")
            .push(entry.clone());
        Ok(entry)
    }

    fn fetch_new(&self, limit: usize) -> Result<Vec<OutboxEntry>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries
            .iter()
            .filter(|e| e.status == OutboxStatus::New)
            .take(limit)
            .cloned()
            .collect())
    }

    fn mark(&self, id: Uuid, status: OutboxStatus) -> Result<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(OutboxError::NotFound(id))?;
        entry.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn publish_appends_with_status_new() {
        let outbox = InMemoryOutbox::new();
        let entry = outbox
            .publish(json!({"action": "WRITE_COMMIT", "branch": "main"}))
            .unwrap();
        assert_eq!(entry.status, OutboxStatus::New);
        assert_eq!(outbox.len(), 1);
    }

    #[test]
    fn fetch_new_is_oldest_first_and_bounded() {
        let outbox = InMemoryOutbox::new();
        for i in 0..5 {
            outbox.publish(json!({"n": i})).unwrap();
        }
        let batch = outbox.fetch_new(3).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].payload["n"], 0);
        assert_eq!(batch[2].payload["n"], 2);
    }

    #[test]
    fn marked_entries_leave_the_new_queue() {
        let outbox = InMemoryOutbox::new();
        let a = outbox.publish(json!({"n": 1})).unwrap();
        outbox.publish(json!({"n": 2})).unwrap();

        outbox.mark(a.id, OutboxStatus::Dispatched).unwrap();
        let remaining = outbox.fetch_new(10).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].payload["n"], 2);
    }

    #[test]
    fn mark_unknown_entry_fails() {
        let outbox = InMemoryOutbox::new();
        let err = outbox
            .mark(Uuid::now_v7(), OutboxStatus::Failed)
            .unwrap_err();
        assert!(matches!(err, OutboxError::NotFound(_)));
    }
}
