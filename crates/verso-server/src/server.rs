use std::sync::Arc;

use tokio::net::TcpListener;
use verso_engine::CommitEngine;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::router::build_router;

/// The Verso HTTP server: configuration plus the engine it fronts.
pub struct VersoServer {
    config: ServerConfig,
    engine: Arc<CommitEngine>,
}

impl VersoServer {
    pub fn new(config: ServerConfig, engine: Arc<CommitEngine>) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.engine.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> Result<(), ServerError> {
        let app = build_router(self.engine);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("verso server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
