use std::collections::HashMap;
use std::sync::RwLock;

use verso_types::Digest;

use crate::error::{StoreError, StoreResult};
use crate::object::{ObjectKind, StoredObject};
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind a
/// `RwLock` for safe concurrent access.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<Digest, StoredObject>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored payloads.
    pub fn total_bytes(&self) -> u64 {
        self.objects
            .read()
            .expect("lock poisoned")
            .values()
            .map(StoredObject::size_bytes)
            .sum()
    }

    /// Corrupt the payload stored at `digest`, leaving the key in place.
    ///
    /// Test-only hook for exercising collision detection: the next
    /// `put_if_absent` that recomputes this digest will see differing bytes.
    #[doc(hidden)]
    pub fn poison_payload(&self, digest: &Digest, payload: Vec<u8>) {
        let mut map = self.objects.write().expect("lock poisoned");
        if let Some(obj) = map.get_mut(digest) {
            obj.payload = payload;
        }
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn put_if_absent(&self, kind: ObjectKind, payload: &[u8]) -> StoreResult<Digest> {
        let digest = Digest::of(payload);
        let mut map = self.objects.write().expect("lock poisoned");
        match map.get(&digest) {
            None => {
                map.insert(digest, StoredObject::new(kind, payload.to_vec()));
                Ok(digest)
            }
            // Idempotent: identical bytes already stored.
            Some(existing) if existing.payload == payload => Ok(digest),
            // Same digest, different bytes: hash break or encoder bug.
            Some(_) => {
                tracing::error!(digest = %digest, kind = %kind, "digest collision on write");
                Err(StoreError::DigestCollision { digest })
            }
        }
    }

    fn get(&self, digest: &Digest) -> StoreResult<Option<StoredObject>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.get(digest).cloned())
    }

    fn exists(&self, digest: &Digest) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(digest))
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Idempotent writes
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let store = InMemoryObjectStore::new();
        let digest = store.put_if_absent(ObjectKind::Blob, b"hello").unwrap();
        let obj = store.get(&digest).unwrap().expect("should exist");
        assert_eq!(obj.payload, b"hello");
        assert_eq!(obj.kind, ObjectKind::Blob);
        assert_eq!(obj.digest, digest);
    }

    #[test]
    fn put_is_idempotent() {
        let store = InMemoryObjectStore::new();
        let d1 = store.put_if_absent(ObjectKind::Tree, b"snapshot").unwrap();
        let d2 = store.put_if_absent(ObjectKind::Tree, b"snapshot").unwrap();
        assert_eq!(d1, d2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_payloads_are_both_kept() {
        let store = InMemoryObjectStore::new();
        let d1 = store.put_if_absent(ObjectKind::Blob, b"aaa").unwrap();
        let d2 = store.put_if_absent(ObjectKind::Blob, b"bbb").unwrap();
        assert_ne!(d1, d2);
        assert_eq!(store.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Collision detection
    // -----------------------------------------------------------------------

    #[test]
    fn divergent_payload_under_existing_digest_is_fatal() {
        let store = InMemoryObjectStore::new();
        let digest = store.put_if_absent(ObjectKind::Commit, b"original").unwrap();
        store.poison_payload(&digest, b"tampered".to_vec());

        let err = store
            .put_if_absent(ObjectKind::Commit, b"original")
            .unwrap_err();
        assert!(matches!(err, StoreError::DigestCollision { digest: d } if d == digest));
    }

    // -----------------------------------------------------------------------
    // Exists / missing reads
    // -----------------------------------------------------------------------

    #[test]
    fn exists_reflects_writes() {
        let store = InMemoryObjectStore::new();
        let absent = Digest::of(b"never written");
        assert!(!store.exists(&absent).unwrap());

        let digest = store.put_if_absent(ObjectKind::Blob, b"present").unwrap();
        assert!(store.exists(&digest).unwrap());
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryObjectStore::new();
        assert!(store.get(&Digest::of(b"missing")).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_total_bytes() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());
        store.put_if_absent(ObjectKind::Blob, b"12345").unwrap();
        store.put_if_absent(ObjectKind::Blob, b"123456789").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_bytes(), 14);
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        let digest = store.put_if_absent(ObjectKind::Blob, b"shared").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let obj = store.get(&digest).unwrap().unwrap();
                    assert_eq!(Digest::of(&obj.payload), digest);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::new();
        store.put_if_absent(ObjectKind::Blob, b"x").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("object_count"));
    }
}
