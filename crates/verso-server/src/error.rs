use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use verso_engine::EngineError;

/// Server lifecycle errors (startup, config, bind).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Request-scoped error with a client-facing status.
///
/// NotFound-class engine errors become 404, conflicts (duplicate branch,
/// lost compare-and-swap) become 409, and a commit collision -- a broken
/// invariant, not a client mistake -- becomes 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Engine(e) => match e {
                EngineError::RepositoryNotFound(_)
                | EngineError::BranchNotFound { .. }
                | EngineError::TreeNotFound(_)
                | EngineError::CommitNotFound(_) => StatusCode::NOT_FOUND,
                EngineError::BranchExists(_) | EngineError::RefConflict { .. } => {
                    StatusCode::CONFLICT
                }
                EngineError::InvalidBranchName { .. } => StatusCode::BAD_REQUEST,
                EngineError::ImmutableRef(_) => StatusCode::CONFLICT,
                EngineError::CommitCollision(_)
                | EngineError::Store(_)
                | EngineError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
