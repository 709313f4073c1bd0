use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};

use crate::error::TypeError;

/// Content address of a stored object: the SHA-256 hash of its payload.
///
/// Identical payload bytes always produce the same `Digest`, making objects
/// deduplicatable and verifiable. On the wire and in canonical encodings a
/// digest is always its lowercase hex string (64 characters).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Compute the digest of raw payload bytes.
    pub fn of(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Wrap a pre-computed 32-byte hash.
    pub const fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex representation (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters), for logs.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A pointer to a commit: either a concrete [`Digest`] or the sentinel
/// `"0"` meaning "no commit yet" (empty history).
///
/// Branch refs and commit parents are always `CommitPointer`s; the sentinel
/// is its own variant rather than a magic digest value, so "empty history"
/// can never be confused with a real object address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CommitPointer {
    /// No commit yet. Serializes as the string `"0"`.
    Sentinel,
    /// A concrete commit digest.
    Commit(Digest),
}

impl CommitPointer {
    /// Returns `true` if this is the empty-history sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel)
    }

    /// The digest, if this pointer is not the sentinel.
    pub fn digest(&self) -> Option<&Digest> {
        match self {
            Self::Sentinel => None,
            Self::Commit(d) => Some(d),
        }
    }

    /// Parse from the wire form: `"0"` or a 64-character hex digest.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s == "0" {
            Ok(Self::Sentinel)
        } else {
            Ok(Self::Commit(Digest::from_hex(s)?))
        }
    }
}

impl From<Digest> for CommitPointer {
    fn from(digest: Digest) -> Self {
        Self::Commit(digest)
    }
}

impl fmt::Display for CommitPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel => write!(f, "0"),
            Self::Commit(d) => write!(f, "{d}"),
        }
    }
}

impl FromStr for CommitPointer {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CommitPointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CommitPointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
