//! Content-addressed object storage for Verso.
//!
//! This crate implements the hash-keyed object store at the heart of the
//! version-control engine, analogous to git's `.git/objects/` directory.
//! Every commit, tree, and blob is an immutable object identified by the
//! SHA-256 digest of its payload.
//!
//! Three concerns live here:
//!
//! - [`ObjectStore`] -- primary, content-addressed storage with idempotent
//!   writes and digest-collision detection
//! - [`MetaStore`] -- write-once [`CommitMeta`] index rows kept beside the
//!   objects so commit listings never deserialize payloads
//! - [`BlobMirror`] -- best-effort secondary copy of object bytes into bulk
//!   storage, deduplicated by an existence probe
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written. `digest = sha256(payload)` always.
//! 2. Writing identical bytes under an existing digest is a no-op; writing
//!    *different* bytes under an existing digest is a fatal
//!    [`StoreError::DigestCollision`], never an overwrite.
//! 3. The store never interprets object contents -- it is a pure key-value
//!    store keyed by content hash.
//! 4. The mirror is a cache, not a second source of truth: its failures are
//!    logged and swallowed by callers.

pub mod error;
pub mod memory;
pub mod meta;
pub mod mirror;
pub mod object;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryObjectStore;
pub use meta::{CommitMeta, InMemoryMetaStore, MetaStore};
pub use mirror::{mirror_key, BlobMirror, InMemoryBlobMirror};
pub use object::{ObjectKind, StoredObject};
pub use traits::ObjectStore;
