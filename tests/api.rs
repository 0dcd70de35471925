//! Public API tests for the NRF-1.1 Rust implementation.
//!
//! Complements `conformance.rs`: these exercise the `Value`-based API
//! directly (construction, round-tripping, error identity) and the
//! JSON bridge, rather than replaying fixed byte vectors.

use nrf1::json::{from_json, to_json};
use nrf1::{decode, encode, from_hex, to_hex, ErrorKind, Value};

// ── round-trip law ──────────────────────────────────────────

#[test]
fn round_trips_nested_descriptor() {
    let val = Value::Map(vec![
        ("action".into(), Value::String("deploy".into())),
        (
            "args".into(),
            Value::Array(vec![Value::Int64(1), Value::Null, Value::Bool(true)]),
        ),
        ("payload".into(), Value::Bytes(vec![1, 2, 3])),
    ]);
    let bytes = encode(&val).unwrap();
    assert_eq!(decode(&bytes).unwrap(), val);
    // decode(encode(v)) == v and encode(decode(b)) == b both hold here
    // since `bytes` was itself produced by `encode`.
    assert_eq!(encode(&decode(&bytes).unwrap()).unwrap(), bytes);
}

#[test]
fn empty_containers_round_trip() {
    for val in [Value::Array(vec![]), Value::Map(vec![])] {
        let bytes = encode(&val).unwrap();
        assert_eq!(decode(&bytes).unwrap(), val);
    }
}

#[test]
fn deeply_nested_value_round_trips() {
    let mut val = Value::Null;
    for _ in 0..64 {
        val = Value::Array(vec![val]);
    }
    let bytes = encode(&val).unwrap();
    assert_eq!(decode(&bytes).unwrap(), val);
}

// ── determinism ──────────────────────────────────────────────

#[test]
fn encode_is_deterministic() {
    let val = Value::Map(vec![("x".into(), Value::String("hello".into()))]);
    assert_eq!(encode(&val).unwrap(), encode(&val).unwrap());
}

// ── type distinction ─────────────────────────────────────────

#[test]
fn bool_true_differs_from_string_true() {
    let bool_val = Value::Map(vec![("v".into(), Value::Bool(true))]);
    let str_val = Value::Map(vec![("v".into(), Value::String("true".into()))]);
    assert_ne!(encode(&bool_val).unwrap(), encode(&str_val).unwrap());
}

#[test]
fn int_42_differs_from_string_42() {
    let int_val = Value::Map(vec![("v".into(), Value::Int64(42))]);
    let str_val = Value::Map(vec![("v".into(), Value::String("42".into()))]);
    assert_ne!(encode(&int_val).unwrap(), encode(&str_val).unwrap());
}

// ── map key ordering ─────────────────────────────────────────

#[test]
fn unsorted_input_is_sorted_not_rejected_on_encode() {
    let unsorted = Value::Map(vec![
        ("b".into(), Value::String("2".into())),
        ("a".into(), Value::String("1".into())),
    ]);
    let sorted = Value::Map(vec![
        ("a".into(), Value::String("1".into())),
        ("b".into(), Value::String("2".into())),
    ]);
    assert_eq!(encode(&unsorted).unwrap(), encode(&sorted).unwrap());
    // Decoding the result yields the canonical, sorted order.
    assert_eq!(decode(&encode(&unsorted).unwrap()).unwrap(), sorted);
}

#[test]
fn duplicate_key_detected_on_encode() {
    let val = Value::Map(vec![
        ("a".into(), Value::String("1".into())),
        ("a".into(), Value::String("2".into())),
    ]);
    let err = encode(&val).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
}

#[test]
fn byte_lexicographic_order_not_codepoint_order() {
    // '\u{e9}' (0xc3 0xa9 in UTF-8) sorts after ASCII 'z' byte-wise, even
    // though its Unicode scalar value is far smaller.
    let val = Value::Map(vec![
        ("z".into(), Value::Null),
        ("\u{e9}".into(), Value::Null),
    ]);
    encode(&val).expect("byte order, not scalar-value order, must be accepted");
}

// ── error identity ────────────────────────────────────────────

#[test]
fn error_kind_is_stable_identity_not_message_text() {
    let err = decode(b"bad!").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMagic);
    // Display text may change; `kind()` is what callers should match on.
    let _ = err.to_string();
}

// ── JSON bridge ────────────────────────────────────────────

#[test]
fn json_bridge_round_trips_descriptor() {
    let val = Value::Map(vec![
        ("name".into(), Value::String("widget".into())),
        ("tags".into(), Value::Array(vec![Value::String("a".into())])),
        ("blob".into(), Value::Bytes(vec![0xca, 0xfe])),
    ]);
    let json = to_json(&val);
    assert_eq!(from_json(&json).unwrap(), val);
}

#[test]
fn json_bridge_rejects_float() {
    let json = serde_json::json!(1.5);
    assert!(from_json(&json).is_err());
}

// ── hex vector helpers ───────────────────────────────────────

#[test]
fn hex_round_trips_encoded_stream() {
    let val = Value::String("hi".into());
    let bytes = encode(&val).unwrap();
    let hex_str = to_hex(&bytes);
    assert_eq!(from_hex(&hex_str).unwrap(), bytes);
}

#[test]
fn from_hex_rejects_odd_length() {
    let err = from_hex("abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidHex);
}
