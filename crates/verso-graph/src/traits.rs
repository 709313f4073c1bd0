use verso_types::RepoId;

use crate::error::Result;
use crate::model::CommitNode;

/// Write-through projector of commit metadata into the graph store.
///
/// Implementations scope one write transaction per call and release the
/// session on every exit path.
pub trait GraphProjector: Send + Sync {
    /// Upsert the `Repo` node for a newly created repository.
    fn project_repo(&self, repo_id: &RepoId) -> Result<()>;

    /// Project one commit: upsert the `Repo`, `Commit`, and `Branch` nodes,
    /// detach the branch's prior `HEAD` edge, and link the branch to the
    /// new commit.
    fn project_commit(&self, repo_id: &RepoId, commit: &CommitNode, branch: &str) -> Result<()>;
}
