//! Canonical JSON encoding for hashed records.
//!
//! Digests must be a pure function of logical content, so anything that gets
//! hashed is serialized through [`serde_json::Value`], whose object map is a
//! `BTreeMap`: keys come out sorted regardless of struct field order. No
//! floats are used in hashed records, so numeric formatting is stable.

use serde::Serialize;

use crate::error::TypeError;

/// Serialize a value to canonical JSON bytes (sorted object keys).
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>, TypeError> {
    let v = serde_json::to_value(value).map_err(|e| TypeError::Serialization(e.to_string()))?;
    serde_json::to_vec(&v).map_err(|e| TypeError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Unordered {
        zebra: u32,
        alpha: u32,
        mid: &'static str,
    }

    #[test]
    fn keys_are_sorted() {
        let bytes = to_canonical_json(&Unordered {
            zebra: 1,
            alpha: 2,
            mid: "m",
        })
        .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, r#"{"alpha":2,"mid":"m","zebra":1}"#);
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = to_canonical_json(&Unordered {
            zebra: 9,
            alpha: 9,
            mid: "x",
        })
        .unwrap();
        let b = to_canonical_json(&Unordered {
            zebra: 9,
            alpha: 9,
            mid: "x",
        })
        .unwrap();
        assert_eq!(a, b);
    }
}
