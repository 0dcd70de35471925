//! NRF-1.1 decoder (§4.4).
//!
//! Parses a byte sequence into a `Value`, enforcing every invariant as it
//! goes: there's no separate "parse, then validate" pass — a violation
//! stops the decode at the point it's found, per the precedence rule in
//! §7 (the first structural check on a given byte wins).

use crate::constants::*;
use crate::errors::{ErrorKind, NrfError};
use crate::strings::validate_string_bytes;
use crate::value::Value;
use crate::varint::decode_varint32;

/// Decode a full NRF-1.1 stream: four-byte magic, one recursive value,
/// then nothing else.
pub fn decode(input: &[u8]) -> Result<Value, NrfError> {
    if input.len() < 4 || &input[0..4] != MAGIC {
        // Short input is InvalidMagic too, not UnexpectedEOF — the magic
        // check precedes value parsing entirely (§7).
        return Err(NrfError::new(ErrorKind::InvalidMagic, 0));
    }
    let (value, offset) = decode_value(input, 4)?;
    if offset != input.len() {
        return Err(NrfError::new(ErrorKind::TrailingData, offset));
    }
    Ok(value)
}

fn read_exact<'a>(buf: &'a [u8], offset: usize, n: usize) -> Result<(&'a [u8], usize), NrfError> {
    if offset + n > buf.len() {
        return Err(NrfError::new(ErrorKind::UnexpectedEof, offset));
    }
    Ok((&buf[offset..offset + n], offset + n))
}

fn decode_value(buf: &[u8], offset: usize) -> Result<(Value, usize), NrfError> {
    let (tag_slice, mut offset) = read_exact(buf, offset, 1)?;
    let tag = tag_slice[0];

    match tag {
        TAG_NULL => Ok((Value::Null, offset)),
        TAG_FALSE => Ok((Value::Bool(false), offset)),
        TAG_TRUE => Ok((Value::Bool(true), offset)),

        TAG_INT64 => {
            let (bytes, new_offset) = read_exact(buf, offset, 8)?;
            let mut arr = [0u8; 8];
            arr.copy_from_slice(bytes);
            Ok((Value::Int64(i64::from_be_bytes(arr)), new_offset))
        }

        TAG_STRING => {
            let (s, new_offset) = decode_string(buf, offset)?;
            Ok((Value::String(s), new_offset))
        }

        TAG_BYTES => {
            let (len, new_offset) = decode_varint32(buf, offset)?;
            offset = new_offset;
            let (bytes, new_offset) = read_exact(buf, offset, len as usize)?;
            Ok((Value::Bytes(bytes.to_vec()), new_offset))
        }

        TAG_ARRAY => {
            let (count, new_offset) = decode_varint32(buf, offset)?;
            offset = new_offset;
            // `count` comes straight off the wire and is untrusted: do not
            // pre-size off of it (a `count` of u32::MAX against a 10-byte
            // input must fail UnexpectedEOF from the first missing element,
            // not abort on a multi-GB allocation request). Grow as we go.
            let mut items = Vec::new();
            for _ in 0..count {
                let (item, new_offset) = decode_value(buf, offset)?;
                items.push(item);
                offset = new_offset;
            }
            Ok((Value::Array(items), offset))
        }

        TAG_MAP => decode_map(buf, offset),

        _ => Err(NrfError::new(ErrorKind::InvalidTypeTag, offset - 1)),
    }
}

/// Decode a length-prefixed UTF-8 string payload starting just past its
/// `0x04` tag byte, running the full string validator (§4.2) over it.
fn decode_string(buf: &[u8], offset: usize) -> Result<(String, usize), NrfError> {
    let (len, offset) = decode_varint32(buf, offset)?;
    let (bytes, new_offset) = read_exact(buf, offset, len as usize)?;
    let s = validate_string_bytes(bytes, offset)?;
    Ok((s, new_offset))
}

fn decode_map(buf: &[u8], offset: usize) -> Result<(Value, usize), NrfError> {
    let (count, mut offset) = decode_varint32(buf, offset)?;
    // Same untrusted-length caveat as the array path above: grow as we go
    // rather than pre-sizing off of `count`.
    let mut entries: Vec<(String, Value)> = Vec::new();
    let mut prev_key: Option<Vec<u8>> = None;

    for _ in 0..count {
        let (tag_slice, _) = read_exact(buf, offset, 1)?;
        if tag_slice[0] != TAG_STRING {
            // Supersedes InvalidTypeTag at map-key position (§4.4, §7).
            return Err(NrfError::new(ErrorKind::NonStringKey, offset));
        }

        let (key, new_offset) = decode_string(buf, offset + 1)?;
        let key_bytes = key.as_bytes();

        if let Some(prev) = &prev_key {
            match prev.as_slice().cmp(key_bytes) {
                std::cmp::Ordering::Equal => {
                    return Err(NrfError::new(ErrorKind::DuplicateKey, new_offset));
                }
                std::cmp::Ordering::Greater => {
                    return Err(NrfError::new(ErrorKind::UnsortedKeys, new_offset));
                }
                std::cmp::Ordering::Less => {}
            }
        }
        prev_key = Some(key_bytes.to_vec());

        let (value, new_offset) = decode_value(buf, new_offset)?;
        entries.push((key, value));
        offset = new_offset;
    }

    Ok((Value::Map(entries), offset))
}
