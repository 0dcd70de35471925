//! NRF-1.1 error taxonomy (§4.5).
//!
//! Identity matters here because downstream differential tools (a fuzzer,
//! a cross-language conformance harness) dispatch on *which* invariant was
//! violated. `NrfError` is a closed enum rather than the string-code
//! approach some sibling canonical formats use, so the compiler proves
//! every decode/encode failure mode is handled at every call site that
//! matches on it.
//!
//! Precedence (§7): the first structural check that applies to a given
//! byte position is the one reported. A truncated varint is `UnexpectedEof`
//! if the input simply ends, `NonMinimalVarint` if the bytes present form
//! an overlong encoding. A map key position reports `NonStringKey` instead
//! of `InvalidTypeTag` for a non-string tag. These rules are enforced by
//! the order checks run in `decode.rs`; this module only names the
//! outcomes.

use std::fmt;

/// A decode or encode failure, tagged by the invariant it violates.
///
/// `offset` is the byte position in the input at which the violation was
/// detected, where that's meaningful. It is diagnostic only — two errors
/// of the same kind at different offsets are still the same outcome for
/// conformance purposes, which is why `kind()` rather than full struct
/// equality is what differential tooling should compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NrfError {
    kind: ErrorKind,
    offset: Option<usize>,
}

/// The eleven decode-observable failure kinds from §4.5, plus the
/// encoder-only `VarintOutOfRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidMagic,
    InvalidTypeTag,
    NonMinimalVarint,
    UnexpectedEof,
    InvalidUtf8,
    NotNfc,
    BomPresent,
    NonStringKey,
    UnsortedKeys,
    DuplicateKey,
    TrailingData,
    /// Encoder-only: a collection length or a string/bytes payload length
    /// exceeds `u32::MAX`. Reaching this means the caller built a `Value`
    /// that cannot be represented on the wire at all — a programmer
    /// error, not a validation outcome on untrusted input.
    VarintOutOfRange,
    /// Not a wire-format failure: malformed input to the `from_hex`
    /// vector helper (odd length, non-hex character).
    InvalidHex,
}

impl NrfError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset: Some(offset),
        }
    }

    /// Construct an error with no associated byte offset. Used only for
    /// `VarintOutOfRange`, which is raised before any bytes are written.
    pub fn without_offset(kind: ErrorKind) -> Self {
        Self { kind, offset: None }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidMagic => "InvalidMagic",
            ErrorKind::InvalidTypeTag => "InvalidTypeTag",
            ErrorKind::NonMinimalVarint => "NonMinimalVarint",
            ErrorKind::UnexpectedEof => "UnexpectedEOF",
            ErrorKind::InvalidUtf8 => "InvalidUTF8",
            ErrorKind::NotNfc => "NotNFC",
            ErrorKind::BomPresent => "BOMPresent",
            ErrorKind::NonStringKey => "NonStringKey",
            ErrorKind::UnsortedKeys => "UnsortedKeys",
            ErrorKind::DuplicateKey => "DuplicateKey",
            ErrorKind::TrailingData => "TrailingData",
            ErrorKind::VarintOutOfRange => "VarintOutOfRange",
            ErrorKind::InvalidHex => "InvalidHex",
        };
        f.write_str(s)
    }
}

impl fmt::Display for NrfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(off) => write!(f, "{} at byte {}", self.kind, off),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for NrfError {}
