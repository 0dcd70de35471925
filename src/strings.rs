//! String validator (§4.2).
//!
//! Applied to every decoded string payload (value or map key) and to every
//! string being encoded, in this order:
//!
//! 1. Strict UTF-8 decode.
//! 2. Reject if the text contains U+FEFF anywhere.
//! 3. Reject if the text is not equal to its own NFC normalisation.
//!
//! NFC requires a Unicode normalisation table (§9 Design Notes); this
//! crate links `unicode-normalization`, which the same corpus this crate
//! was grounded on already pulls in for Unicode text processing
//! (`harryzorus-sorex`'s `utils::normalize`, which decomposes with `.nfd()`
//! from the same crate family). We pin whatever Unicode version that
//! crate's release vendors — NFC is not invariant across Unicode major
//! revisions for a small number of code points, so a conforming
//! implementation and its table version travel together.

use unicode_normalization::UnicodeNormalization;

use crate::constants::BOM;
use crate::errors::{ErrorKind, NrfError};

/// Validate raw bytes as a string payload: strict UTF-8, no BOM, NFC-only.
///
/// `offset` is the position of the first byte of `bytes` in the original
/// input, used only to annotate the returned error.
pub fn validate_string_bytes(bytes: &[u8], offset: usize) -> Result<String, NrfError> {
    let s =
        std::str::from_utf8(bytes).map_err(|_| NrfError::new(ErrorKind::InvalidUtf8, offset))?;
    validate_string_rules(s, offset)?;
    Ok(s.to_owned())
}

/// Validate a string value at encode time: no BOM, NFC-only. UTF-8 is
/// already guaranteed by Rust's `str` invariant.
pub fn validate_string_rules(s: &str, offset: usize) -> Result<(), NrfError> {
    if s.contains(BOM) {
        return Err(NrfError::new(ErrorKind::BomPresent, offset));
    }
    if !is_nfc(s) {
        return Err(NrfError::new(ErrorKind::NotNfc, offset));
    }
    Ok(())
}

fn is_nfc(s: &str) -> bool {
    s.chars().eq(s.nfc())
}
