use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use verso_engine::CommitEngine;
use verso_store::{CommitMeta, ObjectKind};
use verso_refs::Ref;
use verso_types::{CommitPointer, Digest, EntityType, RepoId, Repository};

use crate::error::ApiError;

/// Shared handler state: the engine behind every endpoint.
pub type AppState = Arc<CommitEngine>;

fn parse_repo_id(id: &str) -> Result<RepoId, ApiError> {
    RepoId::parse(id).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn ensure_repo(engine: &CommitEngine, repo_id: &RepoId) -> Result<(), ApiError> {
    if engine.get_repository(repo_id)?.is_none() {
        return Err(ApiError::Engine(
            verso_engine::EngineError::RepositoryNotFound(*repo_id),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "verso-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepoRequest {
    pub entity_type: EntityType,
    pub entity_id: String,
}

pub async fn create_repo(
    State(engine): State<AppState>,
    Json(req): Json<CreateRepoRequest>,
) -> Result<(StatusCode, Json<Repository>), ApiError> {
    let repo = engine.create_repository(req.entity_type, &req.entity_id)?;
    Ok((StatusCode::CREATED, Json(repo)))
}

// ---------------------------------------------------------------------------
// Branches / refs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    pub name: String,
    /// Starting commit; defaults to the empty-history sentinel.
    pub from_commit: Option<CommitPointer>,
}

pub async fn create_branch(
    State(engine): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateBranchRequest>,
) -> Result<(StatusCode, Json<Ref>), ApiError> {
    let repo_id = parse_repo_id(&id)?;
    let from = req.from_commit.unwrap_or(CommitPointer::Sentinel);
    let branch = engine.create_branch(&repo_id, &req.name, from)?;
    Ok((StatusCode::CREATED, Json(branch)))
}

pub async fn list_refs(
    State(engine): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Ref>>, ApiError> {
    let repo_id = parse_repo_id(&id)?;
    ensure_repo(&engine, &repo_id)?;
    let refs = engine.list_refs(&repo_id)?;
    Ok(Json(refs))
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PutObjectRequest {
    pub kind: ObjectKind,
    /// Object payload as a UTF-8 string.
    pub data: String,
}

pub async fn put_object(
    State(engine): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PutObjectRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let repo_id = parse_repo_id(&id)?;
    ensure_repo(&engine, &repo_id)?;
    let sha = match req.kind {
        ObjectKind::Tree => engine.put_tree(req.data.as_bytes())?,
        ObjectKind::Blob => engine.put_blob(req.data.as_bytes())?,
        ObjectKind::Commit => {
            return Err(ApiError::BadRequest(
                "commit objects are created via the commits endpoint".into(),
            ))
        }
    };
    Ok((StatusCode::CREATED, Json(json!({ "sha": sha }))))
}

// ---------------------------------------------------------------------------
// Commits
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommitRequest {
    pub branch: String,
    pub tree_sha: Digest,
    pub message: String,
    pub author_id: i64,
}

pub async fn create_commit(
    State(engine): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateCommitRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let repo_id = parse_repo_id(&id)?;
    let sha = engine.commit(
        &repo_id,
        &req.branch,
        req.tree_sha,
        &req.message,
        req.author_id,
    )?;
    Ok((StatusCode::CREATED, Json(json!({ "sha": sha }))))
}

pub async fn list_commits(
    State(engine): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommitMeta>>, ApiError> {
    let repo_id = parse_repo_id(&id)?;
    ensure_repo(&engine, &repo_id)?;
    let rows = engine.list_commits(&repo_id)?;
    Ok(Json(rows))
}
