//! JSON bridge (§6, "JSON bridge (collaborator contract)").
//!
//! Not part of the core — the core deals only in the native `Value`
//! model — but this is the documented convention external tools use to
//! cross-check or transport values over a text channel:
//!
//!   Null/Bool/Int64/String/Array/Map map to the obvious JSON constructs;
//!   Bytes tunnels through a single-key object `{"$bytes": "<hex>"}`.
//!
//! This is a lossless, two-way convention, unlike the stricter JSON
//! ingestion some sibling canonical formats define (duplicate-key
//! rejection, float/null rejection at parse time) — `to_json`/`from_json`
//! just perform the documented structural mapping and leave canonical-
//! value invariants (NFC, key order, i64 range) to `encode`/`decode`.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::errors::{ErrorKind, NrfError};
use crate::value::Value;

const BYTES_KEY: &str = "$bytes";

/// Convert a `Value` to its JSON-bridge representation.
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int64(i) => JsonValue::Number(Number::from(*i)),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Bytes(b) => {
            let mut obj = JsonMap::with_capacity(1);
            obj.insert(BYTES_KEY.to_string(), JsonValue::String(hex::encode(b)));
            JsonValue::Object(obj)
        }
        Value::Array(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Map(entries) => {
            let mut obj = JsonMap::with_capacity(entries.len());
            for (k, v) in entries {
                obj.insert(k.clone(), to_json(v));
            }
            JsonValue::Object(obj)
        }
    }
}

/// Convert a JSON-bridge representation back into a `Value`.
///
/// A JSON object with exactly one key `"$bytes"` whose value is a
/// lowercase even-length hex string becomes `Value::Bytes`; every other
/// object becomes `Value::Map`. JSON floats have no `Value` counterpart
/// and are rejected — the bridge is lossless only for values that
/// originated on the NRF-1.1 side.
pub fn from_json(json: &JsonValue) -> Result<Value, NrfError> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            let i = n
                .as_i64()
                .ok_or_else(|| NrfError::without_offset(ErrorKind::InvalidTypeTag))?;
            Ok(Value::Int64(i))
        }
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(from_json(item)?);
            }
            Ok(Value::Array(out))
        }
        JsonValue::Object(obj) => {
            if let Some(bytes_val) = as_bytes_tunnel(obj) {
                return bytes_val;
            }
            let mut entries = Vec::with_capacity(obj.len());
            for (k, v) in obj {
                entries.push((k.clone(), from_json(v)?));
            }
            entries.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
            Ok(Value::Map(entries))
        }
    }
}

fn as_bytes_tunnel(obj: &JsonMap<String, JsonValue>) -> Option<Result<Value, NrfError>> {
    if obj.len() != 1 {
        return None;
    }
    let hex_str = obj.get(BYTES_KEY)?.as_str()?;
    if hex_str.len() % 2 != 0 || hex_str.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(Err(NrfError::without_offset(ErrorKind::InvalidTypeTag)));
    }
    Some(
        hex::decode(hex_str)
            .map(Value::Bytes)
            .map_err(|_| NrfError::without_offset(ErrorKind::InvalidTypeTag)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_scalars() {
        for v in [Value::Null, Value::Bool(true), Value::Int64(-7)] {
            let j = to_json(&v);
            assert_eq!(from_json(&j).unwrap(), v);
        }
    }

    #[test]
    fn round_trips_bytes_via_hex_tunnel() {
        let v = Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        let j = to_json(&v);
        assert_eq!(j, serde_json::json!({"$bytes": "deadbeef"}));
        assert_eq!(from_json(&j).unwrap(), v);
    }

    #[test]
    fn round_trips_nested_map() {
        let v = Value::Map(vec![
            ("a".into(), Value::String("x".into())),
            ("b".into(), Value::Array(vec![Value::Int64(1), Value::Null])),
        ]);
        let j = to_json(&v);
        assert_eq!(from_json(&j).unwrap(), v);
    }

    #[test]
    fn rejects_uppercase_hex_in_bytes_tunnel() {
        let j = serde_json::json!({"$bytes": "DEADBEEF"});
        assert!(from_json(&j).is_err());
    }
}
