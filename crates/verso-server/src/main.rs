use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use verso_engine::CommitEngine;
use verso_server::{ServerConfig, VersoServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("VERSO_CONFIG") {
        Ok(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            ServerConfig::from_toml_str(&text).context("parsing config file")?
        }
        Err(_) => ServerConfig::default(),
    };

    let engine = Arc::new(CommitEngine::in_memory());
    let server = VersoServer::new(config, engine);
    server.serve().await.context("server exited")?;
    Ok(())
}
