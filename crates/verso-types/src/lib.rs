//! Foundation types for Verso, a content-addressed version-control engine
//! for tracked entities (contracts, templates, ...).
//!
//! Everything stored by Verso is addressed by the SHA-256 digest of its
//! serialized bytes. This crate defines the identity and record types that
//! the storage, ref, and engine crates build on:
//!
//! - [`Digest`] -- hex-encoded SHA-256 content address
//! - [`CommitPointer`] -- a digest or the `"0"` sentinel ("no commit yet")
//! - [`RepoId`], [`EntityType`], [`Repository`] -- repository identity
//! - [`CommitRecord`] -- the versioned logical commit, hashed over its
//!   canonical JSON encoding
//!
//! # Design Rules
//!
//! 1. A digest is always the SHA-256 of the exact stored payload bytes.
//! 2. The empty-history sentinel is never a fake digest: it is its own
//!    variant of [`CommitPointer`] and serializes as the string `"0"`.
//! 3. Commit records carry an explicit schema version and are serialized
//!    with sorted keys, so digest determinism is a property, not an
//!    accident of field order.

pub mod canonical;
pub mod commit;
pub mod digest;
pub mod error;
pub mod repo;

pub use canonical::to_canonical_json;
pub use commit::{CommitRecord, COMMIT_SCHEMA_VERSION};
pub use digest::{CommitPointer, Digest};
pub use error::TypeError;
pub use repo::{EntityType, RepoId, Repository};
