use serde::{Deserialize, Serialize};
use verso_types::Digest;

/// The kind of object stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// A logical commit record.
    Commit,
    /// A snapshot of content structure referenced by commits.
    Tree,
    /// Raw content bytes.
    Blob,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Commit => write!(f, "commit"),
            Self::Tree => write!(f, "tree"),
            Self::Blob => write!(f, "blob"),
        }
    }
}

/// An immutable, content-addressed stored object: kind tag + payload bytes.
///
/// The store never interprets `payload` -- decoding commit records is the
/// engine's business. `digest` is always `sha256(payload)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    /// Content address: SHA-256 of `payload`.
    pub digest: Digest,
    /// The type of this object.
    pub kind: ObjectKind,
    /// The serialized bytes of the object.
    pub payload: Vec<u8>,
}

impl StoredObject {
    /// Create a stored object, computing its digest from the payload.
    pub fn new(kind: ObjectKind, payload: Vec<u8>) -> Self {
        let digest = Digest::of(&payload);
        Self {
            digest,
            kind,
            payload,
        }
    }

    /// Payload length in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.payload.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_computed_from_payload() {
        let obj = StoredObject::new(ObjectKind::Blob, b"content".to_vec());
        assert_eq!(obj.digest, Digest::of(b"content"));
        assert_eq!(obj.size_bytes(), 7);
    }

    #[test]
    fn kind_does_not_affect_the_digest() {
        // Addressing is by payload bytes alone; the kind is a tag.
        let blob = StoredObject::new(ObjectKind::Blob, b"same".to_vec());
        let tree = StoredObject::new(ObjectKind::Tree, b"same".to_vec());
        assert_eq!(blob.digest, tree.digest);
    }

    #[test]
    fn kind_display_and_serde() {
        assert_eq!(ObjectKind::Commit.to_string(), "commit");
        assert_eq!(ObjectKind::Tree.to_string(), "tree");
        assert_eq!(ObjectKind::Blob.to_string(), "blob");
        assert_eq!(
            serde_json::from_str::<ObjectKind>("\"tree\"").unwrap(),
            ObjectKind::Tree
        );
    }
}
