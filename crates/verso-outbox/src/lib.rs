//! Transactional outbox for Verso side effects.
//!
//! Every commit publishes an intent record describing the write, so an
//! external dispatcher can deliver side effects to downstream consumers
//! at-least-once. The engine only ever appends entries with status
//! [`OutboxStatus::New`]; dispatching, retry, and backoff belong to the
//! external worker, which flips entries to `Dispatched` or `Failed`.
//!
//! # Modules
//!
//! - [`entry`] -- [`OutboxEntry`] and [`OutboxStatus`]
//! - [`traits`] -- the [`Outbox`] trait
//! - [`memory`] -- in-memory [`InMemoryOutbox`] for tests and embedding

pub mod entry;
pub mod error;
pub mod memory;
pub mod traits;

pub use entry::{OutboxEntry, OutboxStatus};
pub use error::{OutboxError, Result};
pub use memory::InMemoryOutbox;
pub use traits::Outbox;
