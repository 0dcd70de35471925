//! Unsigned 32-bit varint codec (§4.1).
//!
//! Little-endian groups of 7 payload bits; the high bit of each byte is a
//! continuation flag. At most 5 bytes. The encoder always produces the
//! unique shortest encoding; the decoder rejects anything else.
//!
//! Grounded on the Python reference's `_decode_varint32`/`_encode_varint32`
//! (`original_source/impl/python/nrf_core_ref/nrf_core_ref/nrf.py`) and, for
//! the 5th-byte bound, `original_source/impl/python/nrf1_check.py`'s
//! stricter reading — see the module-level note on the open question below.

use crate::errors::{ErrorKind, NrfError};

const MAX_BYTES: usize = 5;

/// Decode a varint32 starting at `buf[offset]`. Returns the decoded value
/// and the offset just past the last byte consumed.
///
/// Rules (§4.1):
/// 1. At most 5 bytes are read; a 6th continuation byte is
///    `NonMinimalVarint`.
/// 2. Running out of input before the chain terminates is `UnexpectedEof`.
/// 3. The last byte of a multi-byte encoding must carry a non-zero payload
///    bit (no trailing `0x80...0x00`); a lone `0x80` is rejected too.
/// 4. On the 5th byte, the payload must not carry bits that would push the
///    assembled value past `u32::MAX` — per spec.md §9's "safe reading",
///    any 5th byte with its continuation bit or any of its upper three
///    payload bits set is rejected, because that would require a 6th byte
///    to represent fewer than 32 significant bits remain available here.
pub fn decode_varint32(buf: &[u8], offset: usize) -> Result<(u32, usize), NrfError> {
    let mut result: u32 = 0;
    let mut off = offset;

    for i in 0..MAX_BYTES {
        if off >= buf.len() {
            return Err(NrfError::new(ErrorKind::UnexpectedEof, off));
        }
        let byte = buf[off];
        off += 1;

        // Minimality: a lone 0x80 first byte, or any byte equal to 0x00
        // past the first, means the encoding could have been shorter —
        // this applies to the 5th byte exactly as it does to any other.
        if i == 0 && byte == 0x80 {
            return Err(NrfError::new(ErrorKind::NonMinimalVarint, off - 1));
        }
        if i > 0 && byte == 0x00 {
            return Err(NrfError::new(ErrorKind::NonMinimalVarint, off - 1));
        }

        if i == MAX_BYTES - 1 {
            // 5th byte: continuation bit must be clear (no 6th byte is
            // ever allowed) and only the low 4 payload bits may be set
            // (4 * 7 + 4 = 32 bits total); anything else would need a 6th
            // byte to represent.
            if byte & 0xF0 != 0 {
                return Err(NrfError::new(ErrorKind::NonMinimalVarint, off - 1));
            }
            result |= (byte as u32) << (7 * i as u32);
            return Ok((result, off));
        }

        result |= ((byte & 0x7F) as u32) << (7 * i as u32);
        if byte & 0x80 == 0 {
            return Ok((result, off));
        }
    }

    // Loop only exits via early return for the last iteration; unreachable.
    unreachable!("varint32 decode loop must return within MAX_BYTES iterations")
}

/// Encode `n` as the unique shortest varint32 encoding.
///
/// `n` must fit in `u32`; callers encoding a `usize` length must range-check
/// first (see `encode.rs`), since this is a programmer-error boundary, not
/// a recoverable validation outcome on untrusted input.
pub fn encode_varint32(n: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(5);
    let mut n = n;
    loop {
        let byte = (n & 0x7F) as u8;
        n >>= 7;
        if n == 0 {
            out.push(byte);
            break;
        }
        out.push(0x80 | byte);
    }
    out
}
