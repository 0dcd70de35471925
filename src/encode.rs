//! NRF-1.1 encoder (§4.3).
//!
//! Serialises a `Value` into canonical bytes: `MAGIC || tag || payload`,
//! recursively. The encoder never emits a representation the decoder
//! would reject — any unrepairable invariant violation (non-NFC string,
//! duplicate map key, an oversized collection) is a typed error, not a
//! silent rewrite.
//!
//! Key ordering (§9 Design Notes, §4.3): map keys are sorted by raw UTF-8
//! bytes, using unsigned-octet comparison — `&[u8]`'s `Ord` is already
//! exactly that, so `key.as_bytes().cmp(other.as_bytes())` is correct
//! without a custom comparator. Do not substitute a code-point or
//! collation comparator; they disagree with byte order for a meaningful
//! slice of Unicode. Unsorted input is repaired by sorting, not rejected
//! — §4.3 is imperative ("keys are sorted") and reserves rejection for
//! what sorting cannot fix: a duplicate key.

use crate::constants::*;
use crate::errors::{ErrorKind, NrfError};
use crate::strings::validate_string_rules;
use crate::value::Value;
use crate::varint::encode_varint32;

/// Encode a `Value` into a full NRF-1.1 stream: `MAGIC` followed by the
/// serialised value.
pub fn encode(value: &Value) -> Result<Vec<u8>, NrfError> {
    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    encode_value(value, &mut out)?;
    Ok(out)
}

fn push_len_prefixed(out: &mut Vec<u8>, tag: u8, bytes: &[u8]) -> Result<(), NrfError> {
    let len: u32 = bytes
        .len()
        .try_into()
        .map_err(|_| NrfError::without_offset(ErrorKind::VarintOutOfRange))?;
    out.push(tag);
    out.extend(encode_varint32(len));
    out.extend_from_slice(bytes);
    Ok(())
}

fn encode_value(value: &Value, out: &mut Vec<u8>) -> Result<(), NrfError> {
    match value {
        Value::Null => out.push(TAG_NULL),

        Value::Bool(false) => out.push(TAG_FALSE),
        Value::Bool(true) => out.push(TAG_TRUE),

        Value::Int64(i) => {
            out.push(TAG_INT64);
            out.extend_from_slice(&i.to_be_bytes());
        }

        Value::String(s) => {
            // The string validator runs before any byte of this value is
            // written, matching the "no partial result on failure" rule
            // (§7): a rejected string means nothing from this call lands
            // in `out`'s final return value, because `encode` discards
            // `out` entirely on error.
            validate_string_rules(s, out.len())?;
            push_len_prefixed(out, TAG_STRING, s.as_bytes())?;
        }

        Value::Bytes(b) => {
            push_len_prefixed(out, TAG_BYTES, b)?;
        }

        Value::Array(items) => {
            let count: u32 = items
                .len()
                .try_into()
                .map_err(|_| NrfError::without_offset(ErrorKind::VarintOutOfRange))?;
            out.push(TAG_ARRAY);
            out.extend(encode_varint32(count));
            for item in items {
                encode_value(item, out)?;
            }
        }

        Value::Map(entries) => {
            encode_map(entries, out)?;
        }
    }
    Ok(())
}

fn encode_map(entries: &[(String, Value)], out: &mut Vec<u8>) -> Result<(), NrfError> {
    // Validate every key first, then sort by raw UTF-8 bytes (§4.3: "Before
    // writing, keys are sorted..."). Unlike a non-NFC string or an
    // oversized collection, caller-supplied order isn't an invariant
    // violation — it's repaired here, not rejected; only a genuine
    // duplicate, which sorting cannot repair, is an error (§4.5 grants the
    // encoder no `UnsortedKeys` failure — that kind is decode-only).
    for (key, _) in entries {
        validate_string_rules(key, out.len())?;
    }

    let mut sorted: Vec<&(String, Value)> = entries.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    for i in 1..sorted.len() {
        if sorted[i - 1].0.as_bytes() == sorted[i].0.as_bytes() {
            return Err(NrfError::new(ErrorKind::DuplicateKey, out.len()));
        }
    }

    let count: u32 = sorted
        .len()
        .try_into()
        .map_err(|_| NrfError::without_offset(ErrorKind::VarintOutOfRange))?;
    out.push(TAG_MAP);
    out.extend(encode_varint32(count));
    for (key, val) in sorted {
        push_len_prefixed(out, TAG_STRING, key.as_bytes())?;
        encode_value(val, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_null() {
        assert_eq!(encode(&Value::Null).unwrap(), b"nrf1\x00");
    }

    #[test]
    fn encodes_bool_true() {
        assert_eq!(encode(&Value::Bool(true)).unwrap(), b"nrf1\x02");
    }

    #[test]
    fn encodes_int64_zero_and_negative_one() {
        assert_eq!(
            encode(&Value::Int64(0)).unwrap(),
            vec![0x6e, 0x72, 0x66, 0x31, 0x03, 0, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            encode(&Value::Int64(-1)).unwrap(),
            vec![0x6e, 0x72, 0x66, 0x31, 0x03, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn encodes_short_string() {
        let v = Value::String("hi".to_string());
        assert_eq!(
            encode(&v).unwrap(),
            vec![0x6e, 0x72, 0x66, 0x31, 0x04, 0x02, 0x68, 0x69]
        );
    }

    #[test]
    fn encodes_sorted_map() {
        let v = Value::Map(vec![
            ("name".into(), Value::String("test".into())),
            ("value".into(), Value::Int64(42)),
        ]);
        let got = encode(&v).unwrap();
        let want = vec![
            0x6e, 0x72, 0x66, 0x31, 0x07, 0x02, 0x04, 0x04, 0x6e, 0x61, 0x6d, 0x65, 0x04, 0x04,
            0x74, 0x65, 0x73, 0x74, 0x04, 0x05, 0x76, 0x61, 0x6c, 0x75, 0x65, 0x03, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x2a,
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn encodes_array() {
        let v = Value::Array(vec![Value::Null, Value::Bool(false), Value::Int64(1)]);
        let got = encode(&v).unwrap();
        let want = vec![
            0x6e, 0x72, 0x66, 0x31, 0x06, 0x03, 0x00, 0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x01,
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn sorts_unsorted_map_instead_of_rejecting() {
        let v = Value::Map(vec![("b".into(), Value::Null), ("a".into(), Value::Null)]);
        let got = encode(&v).unwrap();
        let want = Value::Map(vec![("a".into(), Value::Null), ("b".into(), Value::Null)]);
        assert_eq!(got, encode(&want).unwrap());
    }

    #[test]
    fn rejects_duplicate_map_key() {
        let v = Value::Map(vec![("a".into(), Value::Null), ("a".into(), Value::Null)]);
        let err = encode(&v).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    }

    #[test]
    fn rejects_non_nfc_string() {
        let v = Value::String("e\u{0301}".into());
        let err = encode(&v).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotNfc);
    }
}
