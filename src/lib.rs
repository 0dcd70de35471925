//! # nrf1 — NRF-1.1 canonical binary codec
//!
//! A self-describing, length-prefixed, deterministically ordered
//! encoding for a small algebraic value domain: null, boolean, 64-bit
//! signed integer, Unicode string, opaque byte sequence, ordered array,
//! string-keyed map.
//!
//! The codec's defining property is bijective canonicalisation: every
//! accepted input decodes to exactly one logical value, and re-encoding
//! that value reproduces the original byte sequence exactly.
//!
//! ```
//! use nrf1::{decode, encode, Value};
//!
//! let descriptor = Value::Map(vec![
//!     ("name".into(), Value::String("test".into())),
//!     ("value".into(), Value::Int64(42)),
//! ]);
//! let bytes = encode(&descriptor).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), descriptor);
//! ```
//!
//! `encode`/`decode` are pure and allocate only their own output; there
//! is no shared state between calls and no I/O in this crate. See
//! [`ErrorKind`] for the full failure taxonomy.

pub mod constants;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod json;
pub mod strings;
pub mod value;
pub mod varint;

pub use constants::SPEC_VERSION;
pub use errors::{ErrorKind, NrfError};
pub use value::Value;

/// Encode a `Value` into a canonical NRF-1.1 byte stream (§4.3, §6).
pub fn encode(value: &Value) -> Result<Vec<u8>, NrfError> {
    encode::encode(value)
}

/// Decode a canonical NRF-1.1 byte stream into a `Value` (§4.4, §6).
pub fn decode(input: &[u8]) -> Result<Value, NrfError> {
    decode::decode(input)
}

/// Render a byte stream as lowercase hex, matching the convention used
/// by spec.md's vector tables and the JSON bridge's `$bytes` tunnel.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a hex string into its byte stream. Case-insensitive on input
/// (unlike the stricter lowercase-only JSON `$bytes` tunnel, which
/// exists to keep re-serialization deterministic, not to gate parsing).
pub fn from_hex(s: &str) -> Result<Vec<u8>, NrfError> {
    hex::decode(s).map_err(|_| errors::NrfError::without_offset(ErrorKind::InvalidHex))
}
