use serde::{Deserialize, Serialize};
use verso_types::Digest;

/// Properties of a `Commit` node in the projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitNode {
    /// Commit digest -- the node key.
    pub sha: Digest,
    /// Identity of the commit author.
    pub author_id: i64,
    /// Commit message.
    pub message: String,
    /// RFC 3339 commit timestamp.
    pub ts: String,
    /// Serialized payload length of the commit object.
    pub size_bytes: u64,
}
