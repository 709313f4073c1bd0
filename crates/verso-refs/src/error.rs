//! Error types for reference operations.

use thiserror::Error;
use verso_types::{CommitPointer, RepoId};

/// Errors that can occur during repository and reference operations.
#[derive(Debug, Error)]
pub enum RefError {
    /// The repository was not found.
    #[error("repository not found: {repo_id}")]
    RepoNotFound { repo_id: RepoId },

    /// The reference was not found in this repository.
    #[error("ref not found: {name} in {repo_id}")]
    RefNotFound { name: String, repo_id: RepoId },

    /// A reference with this name already exists in the repository.
    #[error("ref already exists: {name}")]
    AlreadyExists { name: String },

    /// The branch name is invalid.
    #[error("invalid branch name: {name}: {reason}")]
    InvalidBranchName { name: String, reason: String },

    /// The ref is immutable (a tag) and cannot be advanced.
    #[error("ref is immutable: {name}")]
    Immutable { name: String },

    /// Compare-and-swap failed: the ref moved since the caller read it.
    /// Retryable -- re-read the ref and try again.
    #[error("ref {name} moved: expected {expected}, found {actual}")]
    CompareFailed {
        name: String,
        expected: CommitPointer,
        actual: CommitPointer,
    },
}

/// Convenience type alias for ref operations.
pub type Result<T> = std::result::Result<T, RefError>;
