//! The [`RefStore`] trait defining the repository and reference interface.

use verso_types::{CommitPointer, Digest, EntityType, RepoId, Repository};

use crate::error::Result;
use crate::types::Ref;

/// Storage backend for repositories and their named references.
///
/// Implementations must be thread-safe (`Send + Sync`). The ref row is the
/// one mutable shared resource in the system, so all movement goes through
/// the compare-and-swap [`advance`]; there is deliberately no unconditional
/// overwrite.
///
/// [`advance`]: RefStore::advance
pub trait RefStore: Send + Sync {
    /// Create a repository and its `main` branch at the empty-history
    /// sentinel, atomically.
    fn create_repository(&self, entity_type: EntityType, entity_id: &str) -> Result<Repository>;

    /// Look up a repository by id. Returns `Ok(None)` if absent.
    fn get_repository(&self, repo_id: &RepoId) -> Result<Option<Repository>>;

    /// Create a branch ref pointing at `from`.
    ///
    /// Fails with [`RefError::RepoNotFound`] if the repository is absent,
    /// [`RefError::InvalidBranchName`] for malformed names, and
    /// [`RefError::AlreadyExists`] if `(name, repo_id)` is taken. Whether a
    /// non-sentinel `from` references a real object is the caller's check --
    /// this store does not see the object store.
    ///
    /// [`RefError::RepoNotFound`]: crate::error::RefError::RepoNotFound
    /// [`RefError::InvalidBranchName`]: crate::error::RefError::InvalidBranchName
    /// [`RefError::AlreadyExists`]: crate::error::RefError::AlreadyExists
    fn create_branch(&self, repo_id: &RepoId, name: &str, from: CommitPointer) -> Result<Ref>;

    /// Read a ref by `(repo_id, name)`. Returns `Ok(None)` if absent.
    fn get_ref(&self, repo_id: &RepoId, name: &str) -> Result<Option<Ref>>;

    /// List all refs of a repository, sorted by name.
    fn list_refs(&self, repo_id: &RepoId) -> Result<Vec<Ref>>;

    /// Advance a branch to `new`, if and only if it still points at
    /// `expected`.
    ///
    /// Returns the updated ref. Fails with [`RefError::CompareFailed`]
    /// (retryable) when a concurrent commit moved the ref first, and
    /// [`RefError::Immutable`] for tags.
    ///
    /// [`RefError::CompareFailed`]: crate::error::RefError::CompareFailed
    /// [`RefError::Immutable`]: crate::error::RefError::Immutable
    fn advance(
        &self,
        repo_id: &RepoId,
        name: &str,
        expected: &CommitPointer,
        new: Digest,
    ) -> Result<Ref>;
}
