use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use verso_graph::{CommitNode, GraphProjector, InMemoryGraph};
use verso_outbox::{InMemoryOutbox, Outbox};
use verso_refs::{InMemoryRefStore, Ref, RefStore};
use verso_store::{
    BlobMirror, CommitMeta, InMemoryBlobMirror, InMemoryMetaStore, InMemoryObjectStore, MetaStore,
    ObjectKind, ObjectStore,
};
use verso_types::{CommitPointer, CommitRecord, Digest, EntityType, RepoId, Repository};

use crate::clock::{Clock, SystemClock};
use crate::error::{EngineError, EngineResult};

/// Orchestrates repository, branch, and commit operations across the
/// object store, ref store, metadata index, blob mirror, outbox, and graph
/// projection.
///
/// The engine holds trait objects, so any backend combination works; the
/// in-memory set is wired up by [`CommitEngine::in_memory`].
pub struct CommitEngine {
    objects: Arc<dyn ObjectStore>,
    refs: Arc<dyn RefStore>,
    meta: Arc<dyn MetaStore>,
    mirror: Arc<dyn BlobMirror>,
    outbox: Arc<dyn Outbox>,
    graph: Arc<dyn GraphProjector>,
    clock: Arc<dyn Clock>,
}

impl CommitEngine {
    /// Assemble an engine over explicit backends.
    pub fn new(
        objects: Arc<dyn ObjectStore>,
        refs: Arc<dyn RefStore>,
        meta: Arc<dyn MetaStore>,
        mirror: Arc<dyn BlobMirror>,
        outbox: Arc<dyn Outbox>,
        graph: Arc<dyn GraphProjector>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            objects,
            refs,
            meta,
            mirror,
            outbox,
            graph,
            clock,
        }
    }

    /// Engine with in-memory backends and the system clock.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryObjectStore::new()),
            Arc::new(InMemoryRefStore::new()),
            Arc::new(InMemoryMetaStore::new()),
            Arc::new(InMemoryBlobMirror::new()),
            Arc::new(InMemoryOutbox::new()),
            Arc::new(InMemoryGraph::new()),
            Arc::new(SystemClock),
        )
    }

    // -----------------------------------------------------------------------
    // Repository / branch operations
    // -----------------------------------------------------------------------

    /// Create a repository for a tracked entity, with a `main` branch at
    /// the empty-history sentinel.
    pub fn create_repository(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> EngineResult<Repository> {
        let repo = self.refs.create_repository(entity_type, entity_id)?;
        info!(repo_id = %repo.id, %entity_type, entity_id, "repository created");

        if let Err(e) = self.graph.project_repo(&repo.id) {
            warn!(repo_id = %repo.id, error = %e, "graph projection of repository failed");
        }
        Ok(repo)
    }

    /// Create a branch pointing at `from`.
    ///
    /// A non-sentinel `from` must reference an existing object.
    pub fn create_branch(
        &self,
        repo_id: &RepoId,
        name: &str,
        from: CommitPointer,
    ) -> EngineResult<Ref> {
        if self.refs.get_repository(repo_id)?.is_none() {
            return Err(EngineError::RepositoryNotFound(*repo_id));
        }
        if let Some(digest) = from.digest() {
            if !self.objects.exists(digest)? {
                return Err(EngineError::CommitNotFound(*digest));
            }
        }
        let branch = self.refs.create_branch(repo_id, name, from)?;
        info!(repo_id = %repo_id, branch = %branch.name, from = %from, "branch created");
        Ok(branch)
    }

    /// Look up a repository by id.
    pub fn get_repository(&self, repo_id: &RepoId) -> EngineResult<Option<Repository>> {
        Ok(self.refs.get_repository(repo_id)?)
    }

    /// Read a ref by `(repo_id, name)`.
    pub fn get_ref(&self, repo_id: &RepoId, name: &str) -> EngineResult<Option<Ref>> {
        Ok(self.refs.get_ref(repo_id, name)?)
    }

    /// All refs of a repository, sorted by name.
    pub fn list_refs(&self, repo_id: &RepoId) -> EngineResult<Vec<Ref>> {
        Ok(self.refs.list_refs(repo_id)?)
    }

    // -----------------------------------------------------------------------
    // Object ingestion
    // -----------------------------------------------------------------------

    /// Store a tree object and return its digest.
    pub fn put_tree(&self, payload: &[u8]) -> EngineResult<Digest> {
        Ok(self.objects.put_if_absent(ObjectKind::Tree, payload)?)
    }

    /// Store a blob object and return its digest.
    pub fn put_blob(&self, payload: &[u8]) -> EngineResult<Digest> {
        Ok(self.objects.put_if_absent(ObjectKind::Blob, payload)?)
    }

    // -----------------------------------------------------------------------
    // Commit
    // -----------------------------------------------------------------------

    /// Create a commit on `branch` snapshotting `tree`, and advance the
    /// branch to it.
    ///
    /// The ref advance is the durability boundary: once it succeeds, the
    /// commit is durable and the metadata, outbox, mirror, and graph writes
    /// that follow are best-effort enrichments.
    pub fn commit(
        &self,
        repo_id: &RepoId,
        branch: &str,
        tree: Digest,
        message: &str,
        author_id: i64,
    ) -> EngineResult<Digest> {
        if self.refs.get_repository(repo_id)?.is_none() {
            return Err(EngineError::RepositoryNotFound(*repo_id));
        }
        let branch_ref =
            self.refs
                .get_ref(repo_id, branch)?
                .ok_or_else(|| EngineError::BranchNotFound {
                    name: branch.to_string(),
                    repo_id: *repo_id,
                })?;

        match self.objects.get(&tree)? {
            Some(obj) if obj.kind == ObjectKind::Tree => {}
            _ => return Err(EngineError::TreeNotFound(tree)),
        }

        let record = CommitRecord::new(
            tree,
            branch_ref.target,
            author_id,
            message,
            self.clock.now(),
        );
        let bytes = record.to_canonical_bytes()?;
        let digest = Digest::of(&bytes);

        // Mirror only when the object is new; put_if_absent then either
        // writes, no-ops on identical bytes, or aborts on a collision --
        // before the ref moves.
        if !self.objects.exists(&digest)? {
            if let Err(e) = self.mirror.store_blob_if_absent(&digest, &bytes) {
                warn!(sha = %digest, error = %e, "blob mirror write failed");
            }
        }
        self.objects.put_if_absent(ObjectKind::Commit, &bytes)?;

        self.refs
            .advance(repo_id, branch, &branch_ref.target, digest)?;
        info!(repo_id = %repo_id, branch, sha = %digest, "commit created");

        // Best-effort enrichments past the durability boundary.
        let meta = CommitMeta {
            commit_digest: digest,
            repo_id: *repo_id,
            author_id,
            message: message.to_string(),
            timestamp: record.timestamp.clone(),
            size_bytes: bytes.len() as u64,
            branch_hint: branch.to_string(),
        };
        if let Err(e) = self.meta.record(meta) {
            warn!(sha = %digest, error = %e, "commit metadata write failed");
        }

        let payload = json!({
            "action": "WRITE_COMMIT",
            "repoId": repo_id,
            "branch": branch,
            "commit": record,
            "sha": digest,
        });
        if let Err(e) = self.outbox.publish(payload) {
            warn!(sha = %digest, error = %e, "outbox publish failed");
        }

        let node = CommitNode {
            sha: digest,
            author_id,
            message: message.to_string(),
            ts: record.timestamp.clone(),
            size_bytes: bytes.len() as u64,
        };
        if let Err(e) = self.graph.project_commit(repo_id, &node, branch) {
            warn!(sha = %digest, error = %e, "graph projection failed");
        }

        Ok(digest)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Metadata rows for a repository's commits, newest first.
    pub fn list_commits(&self, repo_id: &RepoId) -> EngineResult<Vec<CommitMeta>> {
        Ok(self.meta.list_for_repo(repo_id)?)
    }

    /// Walk the parent chain from a branch tip back to the sentinel,
    /// returning digests tip-first.
    pub fn history(&self, repo_id: &RepoId, branch: &str) -> EngineResult<Vec<Digest>> {
        let branch_ref =
            self.refs
                .get_ref(repo_id, branch)?
                .ok_or_else(|| EngineError::BranchNotFound {
                    name: branch.to_string(),
                    repo_id: *repo_id,
                })?;

        let mut chain = Vec::new();
        let mut cursor = branch_ref.target;
        while let Some(digest) = cursor.digest() {
            let obj = self
                .objects
                .get(digest)?
                .ok_or(EngineError::CommitNotFound(*digest))?;
            let record = CommitRecord::from_bytes(&obj.payload)?;
            chain.push(*digest);
            cursor = record.parent;
        }
        Ok(chain)
    }
}
