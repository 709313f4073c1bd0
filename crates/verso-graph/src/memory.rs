use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use verso_types::{Digest, RepoId};

use crate::error::Result;
use crate::model::CommitNode;
use crate::traits::GraphProjector;

#[derive(Debug, Default)]
struct GraphState {
    repos: HashSet<RepoId>,
    commits: HashMap<Digest, CommitNode>,
    branches: HashSet<(RepoId, String)>,
    // One HEAD edge per branch; inserting replaces the prior edge.
    heads: HashMap<(RepoId, String), Digest>,
}

/// In-memory property graph for tests and embedding.
///
/// Stands in for a Cypher-speaking graph database: all writes within one
/// call happen under a single write lock, the moral equivalent of one
/// session-scoped transaction.
#[derive(Debug, Default)]
pub struct InMemoryGraph {
    state: RwLock<GraphState>,
}

impl InMemoryGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a `Repo` node exists.
    pub fn repo_exists(&self, repo_id: &RepoId) -> bool {
        self.state.read().expect("lock poisoned").repos.contains(repo_id)
    }

    /// Read a `Commit` node by digest.
    pub fn commit(&self, sha: &Digest) -> Option<CommitNode> {
        self.state
            .read()
            .expect("lock poisoned")
            .commits
            .get(sha)
            .cloned()
    }

    /// The commit a branch's HEAD edge points at, if any.
    pub fn head_of(&self, repo_id: &RepoId, branch: &str) -> Option<Digest> {
        self.state
            .read()
            .expect("lock poisoned")
            .heads
            .get(&(*repo_id, branch.to_string()))
            .copied()
    }

    /// Number of HEAD edges for a branch (0 or 1 by construction).
    pub fn head_edge_count(&self, repo_id: &RepoId, branch: &str) -> usize {
        usize::from(self.head_of(repo_id, branch).is_some())
    }

    /// Total number of `Commit` nodes.
    pub fn commit_count(&self) -> usize {
        self.state.read().expect("lock poisoned").commits.len()
    }
}

impl GraphProjector for InMemoryGraph {
    fn project_repo(&self, repo_id: &RepoId) -> Result<()> {
        let mut state = self.state.write().expect("lock poisoned");
        state.repos.insert(*repo_id);
        Ok(())
    }

    fn project_commit(&self, repo_id: &RepoId, commit: &CommitNode, branch: &str) -> Result<()> {
        let mut state = self.state.write().expect("lock poisoned");
        state.repos.insert(*repo_id);
        // Merge semantics: keyed by sha, re-projection is a no-op.
        state.commits.entry(commit.sha).or_insert_with(|| commit.clone());
        let key = (*repo_id, branch.to_string());
        state.branches.insert(key.clone());
        // Detach-then-link: the branch never carries two HEAD edges.
        state.heads.insert(key, commit.sha);
        tracing::debug!(repo_id = %repo_id, branch, sha = %commit.sha, "projected commit");
        Ok(())
    }
}
