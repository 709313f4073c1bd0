use thiserror::Error;
use verso_refs::RefError;
use verso_store::StoreError;
use verso_types::{CommitPointer, Digest, RepoId, TypeError};

/// Error taxonomy of the commit engine.
///
/// NotFound variants are recoverable by the caller (fix the request).
/// [`EngineError::RefConflict`] is a retryable race. [`EngineError::CommitCollision`]
/// is fatal: it means the hash function broke or serialization stopped being
/// deterministic, and the operation aborts without advancing the ref.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Repository not found: {0}")]
    RepositoryNotFound(RepoId),

    #[error("Branch not found: {name}")]
    BranchNotFound { name: String, repo_id: RepoId },

    #[error("Tree not found: {0}")]
    TreeNotFound(Digest),

    #[error("Commit not found: {0}")]
    CommitNotFound(Digest),

    #[error("branch already exists: {0}")]
    BranchExists(String),

    #[error("invalid branch name: {name}: {reason}")]
    InvalidBranchName { name: String, reason: String },

    #[error("ref is immutable: {0}")]
    ImmutableRef(String),

    /// Concurrent commit moved the branch first. Retryable: re-read and
    /// commit again.
    #[error("concurrent modification of {name}: expected {expected}, found {actual}")]
    RefConflict {
        name: String,
        expected: CommitPointer,
        actual: CommitPointer,
    },

    /// SHA collision for a commit: same digest, different bytes.
    #[error("SHA collision for commit {0}")]
    CommitCollision(Digest),

    #[error("store error: {0}")]
    Store(StoreError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<RefError> for EngineError {
    fn from(err: RefError) -> Self {
        match err {
            RefError::RepoNotFound { repo_id } => Self::RepositoryNotFound(repo_id),
            RefError::RefNotFound { name, repo_id } => Self::BranchNotFound { name, repo_id },
            RefError::AlreadyExists { name } => Self::BranchExists(name),
            RefError::InvalidBranchName { name, reason } => {
                Self::InvalidBranchName { name, reason }
            }
            RefError::Immutable { name } => Self::ImmutableRef(name),
            RefError::CompareFailed {
                name,
                expected,
                actual,
            } => Self::RefConflict {
                name,
                expected,
                actual,
            },
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DigestCollision { digest } => Self::CommitCollision(digest),
            other => Self::Store(other),
        }
    }
}

impl From<TypeError> for EngineError {
    fn from(err: TypeError) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
