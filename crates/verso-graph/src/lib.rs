//! Graph projection of commit topology for traversal and analytics.
//!
//! Each successful commit is projected into a property graph: a `Repo` node
//! keyed by repository id, a `Commit` node keyed by digest with author,
//! message, timestamp, and size properties, a `Branch` node keyed by
//! `(name, repo_id)`, and a `HEAD` edge from the branch to its current
//! commit.
//!
//! The projection is *derived* state: it can always be rebuilt from the
//! object and ref stores, and projection failures never unwind a commit.
//!
//! # Invariants
//!
//! - Node upserts are merge-semantics: re-projecting the same commit is a
//!   no-op, not a duplicate.
//! - A branch has at most one HEAD edge; the prior edge is detached before
//!   the new one is created.

pub mod error;
pub mod memory;
pub mod model;
pub mod traits;

pub use error::{GraphError, Result};
pub use memory::InMemoryGraph;
pub use model::CommitNode;
pub use traits::GraphProjector;
