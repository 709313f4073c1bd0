use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all Verso endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route("/repos", post(handler::create_repo))
        .route("/repos/:id/branches", post(handler::create_branch))
        .route("/repos/:id/refs", get(handler::list_refs))
        .route("/repos/:id/objects", post(handler::put_object))
        .route(
            "/repos/:id/commits",
            post(handler::create_commit).get(handler::list_commits),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
