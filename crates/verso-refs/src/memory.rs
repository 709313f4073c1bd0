//! In-memory repository and ref store for testing and ephemeral use.
//!
//! [`InMemoryRefStore`] keeps repositories and refs in `HashMap`s behind a
//! single `RwLock`, which makes repository-plus-main-branch creation and
//! compare-and-swap advancement atomic within one lock scope.

use std::collections::HashMap;
use std::sync::RwLock;

use verso_types::{CommitPointer, Digest, EntityType, RepoId, Repository};

use crate::error::{RefError, Result};
use crate::names::validate_branch_name;
use crate::traits::RefStore;
use crate::types::Ref;

#[derive(Debug, Default)]
struct State {
    repos: HashMap<RepoId, Repository>,
    // Keyed by (repo_id, ref name).
    refs: HashMap<(RepoId, String), Ref>,
}

/// An in-memory implementation of [`RefStore`].
///
/// Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryRefStore {
    state: RwLock<State>,
}

impl InMemoryRefStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repositories.
    pub fn repo_count(&self) -> usize {
        self.state.read().expect("lock poisoned").repos.len()
    }
}

impl RefStore for InMemoryRefStore {
    fn create_repository(&self, entity_type: EntityType, entity_id: &str) -> Result<Repository> {
        let repo = Repository::new(entity_type, entity_id);
        let main = Ref::branch(repo.default_branch.clone(), repo.id, CommitPointer::Sentinel);

        let mut state = self.state.write().expect("lock poisoned");
        state
            .refs
            .insert((repo.id, main.name.clone()), main);
        state.repos.insert(repo.id, repo.clone());
        tracing::debug!(repo_id = %repo.id, entity_id, "created repository");
        Ok(repo)
    }

    fn get_repository(&self, repo_id: &RepoId) -> Result<Option<Repository>> {
        let state = self.state.read().expect("lock poisoned");
        Ok(state.repos.get(repo_id).cloned())
    }

    fn create_branch(&self, repo_id: &RepoId, name: &str, from: CommitPointer) -> Result<Ref> {
        validate_branch_name(name)?;

        let mut state = self.state.write().expect("lock poisoned");
        if !state.repos.contains_key(repo_id) {
            return Err(RefError::RepoNotFound { repo_id: *repo_id });
        }

        let key = (*repo_id, name.to_string());
        if state.refs.contains_key(&key) {
            return Err(RefError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let branch = Ref::branch(name, *repo_id, from);
        state.refs.insert(key, branch.clone());
        Ok(branch)
    }

    fn get_ref(&self, repo_id: &RepoId, name: &str) -> Result<Option<Ref>> {
        let state = self.state.read().expect("lock poisoned");
        Ok(state.refs.get(&(*repo_id, name.to_string())).cloned())
    }

    fn list_refs(&self, repo_id: &RepoId) -> Result<Vec<Ref>> {
        let state = self.state.read().expect("lock poisoned");
        let mut refs: Vec<Ref> = state
            .refs
            .values()
            .filter(|r| r.repo_id == *repo_id)
            .cloned()
            .collect();
        refs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(refs)
    }

    fn advance(
        &self,
        repo_id: &RepoId,
        name: &str,
        expected: &CommitPointer,
        new: Digest,
    ) -> Result<Ref> {
        let mut state = self.state.write().expect("lock poisoned");
        let key = (*repo_id, name.to_string());
        let branch = state.refs.get_mut(&key).ok_or(RefError::RefNotFound {
            name: name.to_string(),
            repo_id: *repo_id,
        })?;

        if !branch.is_mutable {
            return Err(RefError::Immutable {
                name: name.to_string(),
            });
        }

        // Compare-and-swap: a concurrent commit that moved the ref first
        // must surface as a conflict, not a silent lost update.
        if branch.target != *expected {
            return Err(RefError::CompareFailed {
                name: name.to_string(),
                expected: *expected,
                actual: branch.target,
            });
        }

        branch.target = CommitPointer::Commit(new);
        Ok(branch.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(data: &[u8]) -> Digest {
        Digest::of(data)
    }

    // -----------------------------------------------------------------------
    // Repository creation
    // -----------------------------------------------------------------------

    #[test]
    fn create_repository_initializes_main_at_sentinel() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        assert_eq!(repo.default_branch, "main");

        let main = store.get_ref(&repo.id, "main").unwrap().unwrap();
        assert!(main.target.is_sentinel());
        assert!(main.is_mutable);
    }

    #[test]
    fn get_repository_miss() {
        let store = InMemoryRefStore::new();
        assert!(store.get_repository(&RepoId::new()).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Branch creation
    // -----------------------------------------------------------------------

    #[test]
    fn create_branch_on_missing_repo_fails() {
        let store = InMemoryRefStore::new();
        let err = store
            .create_branch(&RepoId::new(), "feature", CommitPointer::Sentinel)
            .unwrap_err();
        assert!(matches!(err, RefError::RepoNotFound { .. }));
    }

    #[test]
    fn duplicate_branch_is_a_conflict_not_notfound() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        store
            .create_branch(&repo.id, "feature", CommitPointer::Sentinel)
            .unwrap();
        let err = store
            .create_branch(&repo.id, "feature", CommitPointer::Sentinel)
            .unwrap_err();
        assert!(matches!(err, RefError::AlreadyExists { .. }));
    }

    #[test]
    fn create_branch_validates_the_name() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        let err = store
            .create_branch(&repo.id, "bad..name", CommitPointer::Sentinel)
            .unwrap_err();
        assert!(matches!(err, RefError::InvalidBranchName { .. }));
    }

    #[test]
    fn branches_are_scoped_per_repo() {
        let store = InMemoryRefStore::new();
        let a = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        let b = store
            .create_repository(EntityType::Template, "t1")
            .unwrap();
        // Same name in two repos is fine.
        store
            .create_branch(&a.id, "feature", CommitPointer::Sentinel)
            .unwrap();
        store
            .create_branch(&b.id, "feature", CommitPointer::Sentinel)
            .unwrap();
        assert_eq!(store.list_refs(&a.id).unwrap().len(), 2);
    }

    #[test]
    fn list_refs_is_sorted_by_name() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        store
            .create_branch(&repo.id, "zeta", CommitPointer::Sentinel)
            .unwrap();
        store
            .create_branch(&repo.id, "alpha", CommitPointer::Sentinel)
            .unwrap();
        let names: Vec<_> = store
            .list_refs(&repo.id)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["alpha", "main", "zeta"]);
    }

    // -----------------------------------------------------------------------
    // Compare-and-swap advancement
    // -----------------------------------------------------------------------

    #[test]
    fn advance_from_sentinel() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        let d = digest(b"commit-1");
        let updated = store
            .advance(&repo.id, "main", &CommitPointer::Sentinel, d)
            .unwrap();
        assert_eq!(updated.target.digest(), Some(&d));
    }

    #[test]
    fn advance_with_stale_expected_conflicts() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        let d1 = digest(b"commit-1");
        store
            .advance(&repo.id, "main", &CommitPointer::Sentinel, d1)
            .unwrap();

        // Second writer still believes the branch is at the sentinel.
        let err = store
            .advance(&repo.id, "main", &CommitPointer::Sentinel, digest(b"commit-2"))
            .unwrap_err();
        assert!(matches!(err, RefError::CompareFailed { .. }));

        // Ref is unchanged by the failed swap.
        let main = store.get_ref(&repo.id, "main").unwrap().unwrap();
        assert_eq!(main.target.digest(), Some(&d1));
    }

    #[test]
    fn advance_missing_ref_fails() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        let err = store
            .advance(&repo.id, "ghost", &CommitPointer::Sentinel, digest(b"c"))
            .unwrap_err();
        assert!(matches!(err, RefError::RefNotFound { .. }));
    }

    #[test]
    fn sequential_advances_chain() {
        let store = InMemoryRefStore::new();
        let repo = store
            .create_repository(EntityType::Contract, "c1")
            .unwrap();
        let d1 = digest(b"one");
        let d2 = digest(b"two");
        store
            .advance(&repo.id, "main", &CommitPointer::Sentinel, d1)
            .unwrap();
        store
            .advance(&repo.id, "main", &CommitPointer::Commit(d1), d2)
            .unwrap();
        let main = store.get_ref(&repo.id, "main").unwrap().unwrap();
        assert_eq!(main.target.digest(), Some(&d2));
    }
}
