//! Core reference types.

use serde::{Deserialize, Serialize};
use verso_types::{CommitPointer, RepoId};

/// The flavor of a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    /// A mutable pointer that advances with each commit.
    Branch,
    /// An immutable pointer, fixed at creation.
    Tag,
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Branch => write!(f, "branch"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

/// A named pointer within a repository.
///
/// Identity is the composite `(name, repo_id)`. The wire form keeps the
/// field names of the persisted row: `id`, `repoId`, `commitSha`, `refType`,
/// `isMutable`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    /// Ref name, e.g. `"main"` or `"feature"`.
    #[serde(rename = "id")]
    pub name: String,
    /// Repository this ref belongs to.
    #[serde(rename = "repoId")]
    pub repo_id: RepoId,
    /// Commit the ref points at, or the sentinel for empty history.
    #[serde(rename = "commitSha")]
    pub target: CommitPointer,
    /// Branch or tag.
    #[serde(rename = "refType")]
    pub kind: RefKind,
    /// Branches are mutable; tags are not.
    #[serde(rename = "isMutable")]
    pub is_mutable: bool,
}

impl Ref {
    /// Create a mutable branch ref.
    pub fn branch(name: impl Into<String>, repo_id: RepoId, target: CommitPointer) -> Self {
        Self {
            name: name.into(),
            repo_id,
            target,
            kind: RefKind::Branch,
            is_mutable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_constructor_is_mutable() {
        let r = Ref::branch("main", RepoId::new(), CommitPointer::Sentinel);
        assert_eq!(r.kind, RefKind::Branch);
        assert!(r.is_mutable);
    }

    #[test]
    fn wire_field_names_match_the_persisted_row() {
        let r = Ref::branch("feature", RepoId::new(), CommitPointer::Sentinel);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["id"], "feature");
        assert_eq!(json["commitSha"], "0");
        assert_eq!(json["refType"], "branch");
        assert_eq!(json["isMutable"], true);
        assert!(json.get("repoId").is_some());
    }
}
