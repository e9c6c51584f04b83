//! gzip - RFC 1952 member header.
//!
//! ## Header prefix
//! ```text
//! [0x00] ID1 (0x1F)
//! [0x01] ID2 (0x8B)
//! [0x02] CM  (0x08 = deflate)
//! ```
//!
//! Only the deflate compression method is accepted; it is the only method
//! RFC 1952 defines, so any other `CM` byte is not a gzip member.

/// Magic number plus the deflate method byte.
pub const MAGIC: [u8; 3] = [0x1f, 0x8b, 0x08];

/// Returns `true` if `data` starts with a gzip member header.
#[inline]
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&MAGIC)
}
