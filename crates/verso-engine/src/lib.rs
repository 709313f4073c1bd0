//! The Verso commit engine.
//!
//! Orchestrates the three operations of the version-control core --
//! repository creation, branch creation, and commit creation -- across the
//! object store, ref store, metadata index, blob mirror, outbox, and graph
//! projection.
//!
//! # Durability boundary
//!
//! A commit is durable once the object is written and the ref has advanced.
//! The metadata row, outbox entry, blob mirror copy, and graph projection
//! are synchronous best-effort enrichments: their failures are logged and
//! never unwind a commit whose ref has moved. Downstream consumers must
//! therefore treat those channels as at-least-once and idempotent.
//!
//! # Concurrency
//!
//! The object store is append-only and keyed by content digest, so racing
//! writers of the same object are safe by construction. The ref row is the
//! only mutable shared state; it advances by compare-and-swap, and a lost
//! race surfaces as the retryable [`EngineError::RefConflict`].

pub mod clock;
pub mod engine;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::CommitEngine;
pub use error::{EngineError, EngineResult};
