//! NRF-1.1 wire constants — magic prefix and type tags.
//!
//! Spec references: §6 (wire format), §3 (wire tags).

/// Frozen spec version this implementation conforms to.
pub const SPEC_VERSION: &str = "1.1";

/// 4-byte stream prefix marking an NRF-1.1 stream.
pub const MAGIC: &[u8; 4] = b"nrf1";

// ── Wire tags (single byte each) ─────────────────────────────

pub const TAG_NULL: u8 = 0x00;
pub const TAG_FALSE: u8 = 0x01;
pub const TAG_TRUE: u8 = 0x02;
pub const TAG_INT64: u8 = 0x03;
pub const TAG_STRING: u8 = 0x04;
pub const TAG_BYTES: u8 = 0x05;
pub const TAG_ARRAY: u8 = 0x06;
pub const TAG_MAP: u8 = 0x07;

/// Byte Order Mark code point, rejected in every accepted string (§4.2).
pub const BOM: char = '\u{FEFF}';
