//! Best-effort blob mirror into bulk storage.
//!
//! Large payloads are copied into an external bulk store (S3-style
//! head/put-by-key) keyed by `blobs/{digest[0:2]}/{digest}`. The mirror is a
//! cache: absence is probed before upload, bytes are never verified on the
//! way back, and callers treat failures as log-and-continue.

use std::collections::HashMap;
use std::sync::RwLock;

use verso_types::Digest;

use crate::error::StoreResult;

/// Bulk-storage key for a mirrored payload: two-character fan-out prefix
/// followed by the full digest.
pub fn mirror_key(digest: &Digest) -> String {
    let hex = digest.to_hex();
    format!("blobs/{}/{}", &hex[..2], hex)
}

/// Secondary, deduplicated copy of object payloads in bulk storage.
pub trait BlobMirror: Send + Sync {
    /// Probe for `digest` in bulk storage; upload `bytes` if absent.
    fn store_blob_if_absent(&self, digest: &Digest, bytes: &[u8]) -> StoreResult<()>;
}

/// In-memory stand-in for the bulk store, used in tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryBlobMirror {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
    uploads: RwLock<u64>,
}

impl InMemoryBlobMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a payload is mirrored under this digest.
    pub fn contains(&self, digest: &Digest) -> bool {
        self.blobs
            .read()
            .expect("lock poisoned")
            .contains_key(&mirror_key(digest))
    }

    /// Number of uploads actually performed (probe hits are not uploads).
    pub fn upload_count(&self) -> u64 {
        *self.uploads.read().expect("lock poisoned")
    }
}

impl BlobMirror for InMemoryBlobMirror {
    fn store_blob_if_absent(&self, digest: &Digest, bytes: &[u8]) -> StoreResult<()> {
        let key = mirror_key(digest);
        let mut blobs = self.blobs.write().expect("lock poisoned");
        if blobs.contains_key(&key) {
            return Ok(());
        }
        tracing::debug!(key = %key, bytes = bytes.len(), "mirroring payload to bulk storage");
        blobs.insert(key, bytes.to_vec());
        *self.uploads.write().expect("lock poisoned") += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_has_two_char_fanout_prefix() {
        let digest = Digest::of(b"payload");
        let key = mirror_key(&digest);
        let hex = digest.to_hex();
        assert_eq!(key, format!("blobs/{}/{}", &hex[..2], hex));
    }

    #[test]
    fn upload_once_then_dedup() {
        let mirror = InMemoryBlobMirror::new();
        let digest = Digest::of(b"payload");

        mirror.store_blob_if_absent(&digest, b"payload").unwrap();
        mirror.store_blob_if_absent(&digest, b"payload").unwrap();

        assert!(mirror.contains(&digest));
        assert_eq!(mirror.upload_count(), 1);
    }

    #[test]
    fn distinct_digests_get_distinct_keys() {
        let mirror = InMemoryBlobMirror::new();
        let d1 = Digest::of(b"one");
        let d2 = Digest::of(b"two");
        mirror.store_blob_if_absent(&d1, b"one").unwrap();
        mirror.store_blob_if_absent(&d2, b"two").unwrap();
        assert_eq!(mirror.upload_count(), 2);
    }
}
