//! HTTP server for the Verso version-control engine.
//!
//! A thin axum layer over [`verso_engine::CommitEngine`]: repository,
//! branch, commit, and object-ingestion endpoints plus liveness probes.
//! Engine errors map onto client-facing statuses in [`error`]; the engine
//! itself stays transport-agnostic.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use router::build_router;
pub use server::VersoServer;
