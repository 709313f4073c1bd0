use verso_types::Digest;

use crate::error::StoreResult;
use crate::object::{ObjectKind, StoredObject};

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written; the digest uniquely determines the
///   payload, so concurrent writers racing to create the *same* object are
///   safe by construction.
/// - `put_if_absent` with identical bytes is an idempotent no-op; with
///   differing bytes under an existing digest it is a fatal collision.
/// - Reads are consistent with the most recent successful write.
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Write an object exactly once and return its content address.
    ///
    /// Computes `digest = sha256(payload)`. If no object exists at that
    /// digest, writes `(digest, kind, payload)`. If one exists with
    /// identical bytes, succeeds without writing. If one exists with
    /// *different* bytes, returns [`StoreError::DigestCollision`].
    ///
    /// [`StoreError::DigestCollision`]: crate::error::StoreError::DigestCollision
    fn put_if_absent(&self, kind: ObjectKind, payload: &[u8]) -> StoreResult<Digest>;

    /// Read an object by its content address.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    fn get(&self, digest: &Digest) -> StoreResult<Option<StoredObject>>;

    /// Check whether an object exists in the store.
    fn exists(&self, digest: &Digest) -> StoreResult<bool>;
}
