use serde::{Deserialize, Serialize};

use crate::canonical::to_canonical_json;
use crate::digest::{CommitPointer, Digest};
use crate::error::TypeError;

/// Current commit record schema version.
pub const COMMIT_SCHEMA_VERSION: u32 = 1;

/// The logical commit, stored as an object of kind `commit`.
///
/// `parent` chains to the previous commit on the branch (or the sentinel for
/// the first commit), forming a singly-linked history per branch. The record
/// carries an explicit schema version and is hashed over its canonical JSON
/// encoding, so the digest is a provable function of content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// Schema version of this record ([`COMMIT_SCHEMA_VERSION`]).
    pub schema: u32,
    /// Digest of the tree object snapshotted by this commit.
    pub tree: Digest,
    /// Previous commit on the branch, or the sentinel for the first commit.
    pub parent: CommitPointer,
    /// Identity of the commit author.
    pub author_id: i64,
    /// Human-readable commit message.
    pub message: String,
    /// RFC 3339 timestamp of commit creation.
    pub timestamp: String,
}

impl CommitRecord {
    /// Build a commit record at the current schema version.
    pub fn new(
        tree: Digest,
        parent: CommitPointer,
        author_id: i64,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            schema: COMMIT_SCHEMA_VERSION,
            tree,
            parent,
            author_id,
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Canonical serialized bytes of this record (sorted keys).
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, TypeError> {
        to_canonical_json(self)
    }

    /// Decode a record from stored payload bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}
