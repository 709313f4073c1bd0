//! Repository registry and named references for Verso.
//!
//! A [`Ref`] is a named, mutable pointer to a commit digest within one
//! repository -- the only piece of shared mutable state in an otherwise
//! append-only system. Branches advance as commits are created; tags, once
//! written, never move.
//!
//! # Architecture
//!
//! - Repositories are created once (with a `main` branch at the empty-history
//!   sentinel) and never deleted.
//! - Refs are identified by `(name, repo_id)`; creating a duplicate is a
//!   conflict, distinct from not-found.
//! - Advancement is compare-and-swap: the caller states the pointer it read,
//!   and a concurrent move surfaces as [`RefError::CompareFailed`], a
//!   retryable conflict. There is no unconditional overwrite path.
//!
//! # Modules
//!
//! - [`error`] -- error types for ref operations
//! - [`types`] -- [`Ref`] and [`RefKind`]
//! - [`traits`] -- the [`RefStore`] trait defining the storage interface
//! - [`names`] -- branch-name validation
//! - [`memory`] -- in-memory [`InMemoryRefStore`] for tests and embedding

pub mod error;
pub mod memory;
pub mod names;
pub mod traits;
pub mod types;

pub use error::{RefError, Result};
pub use memory::InMemoryRefStore;
pub use names::validate_branch_name;
pub use traits::RefStore;
pub use types::{Ref, RefKind};
