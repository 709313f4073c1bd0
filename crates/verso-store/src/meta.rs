//! Denormalized commit metadata index.
//!
//! A [`CommitMeta`] row is written once per commit, beside the object store,
//! so commit listings never have to deserialize object payloads.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use verso_types::{Digest, RepoId};

use crate::error::StoreResult;

/// Write-once index row for one commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitMeta {
    /// Digest of the commit object.
    pub commit_digest: Digest,
    /// Repository the commit belongs to.
    pub repo_id: RepoId,
    /// Identity of the commit author.
    pub author_id: i64,
    /// Commit message.
    pub message: String,
    /// RFC 3339 commit timestamp.
    pub timestamp: String,
    /// Serialized payload length of the commit object.
    pub size_bytes: u64,
    /// Branch the commit was created on. A hint only: refs move, rows don't.
    pub branch_hint: String,
}

/// Storage for commit metadata rows.
pub trait MetaStore: Send + Sync {
    /// Record a metadata row. Writing the same commit digest again is a
    /// no-op (rows are write-once).
    fn record(&self, meta: CommitMeta) -> StoreResult<()>;

    /// Look up the row for one commit.
    fn get(&self, commit_digest: &Digest) -> StoreResult<Option<CommitMeta>>;

    /// All rows for a repository, newest first (by insertion order).
    fn list_for_repo(&self, repo_id: &RepoId) -> StoreResult<Vec<CommitMeta>>;
}

/// In-memory metadata index for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryMetaStore {
    rows: RwLock<HashMap<Digest, CommitMeta>>,
    order: RwLock<Vec<Digest>>,
}

impl InMemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the index.
    pub fn len(&self) -> usize {
        self.rows.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().expect("lock poisoned").is_empty()
    }
}

impl MetaStore for InMemoryMetaStore {
    fn record(&self, meta: CommitMeta) -> StoreResult<()> {
        let mut rows = self.rows.write().expect("lock poisoned");
        if rows.contains_key(&meta.commit_digest) {
            return Ok(());
        }
        self.order
            .write()
            .expect("lock poisoned")
            .push(meta.commit_digest);
        rows.insert(meta.commit_digest, meta);
        Ok(())
    }

    fn get(&self, commit_digest: &Digest) -> StoreResult<Option<CommitMeta>> {
        let rows = self.rows.read().expect("lock poisoned");
        Ok(rows.get(commit_digest).cloned())
    }

    fn list_for_repo(&self, repo_id: &RepoId) -> StoreResult<Vec<CommitMeta>> {
        let rows = self.rows.read().expect("lock poisoned");
        let order = self.order.read().expect("lock poisoned");
        Ok(order
            .iter()
            .rev()
            .filter_map(|d| rows.get(d))
            .filter(|m| m.repo_id == *repo_id)
            .cloned()
            .collect())
    }
}
