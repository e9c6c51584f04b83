//! XZ - LZMA2 container, as written by liblzma's default preset encoder.
//!
//! The check is not just the 6-byte stream magic. It compares the whole
//! stream header, the first block header and the first LZMA2 control bytes,
//! which pins down one canonical encoder configuration.
//!
//! ## Matched prefix (26 bytes)
//! ```text
//! [0x00] Stream magic      FD 37 7A 58 5A 00   ("\xFD7zXZ\0")
//! [0x06] Stream flags      00 04               (check = CRC64)
//! [0x08] Header CRC32      E6 D6 B4 46
//! [0x0C] Block header size 02                  ((2 + 1) * 4 = 12 bytes)
//! [0x0D] Block flags       00                  (1 filter, no sizes)
//! [0x0E] Filter ID         21                  (LZMA2)
//! [0x0F] Props size        01
//! [0x10] Dict size         16                  (8 MiB)
//! [0x11] Padding           00 00 00
//! [0x14] Block CRC32       74 2F E5 A3
//! [0x18] LZMA2 control     01                  (uncompressed chunk, dict reset)
//! [0x19] Chunk size hi     00
//! ```
//!
//! Streams whose first LZMA2 chunk is actually compressed (control byte
//! `0xE0` and friends), or whose first chunk is 256 bytes or longer, do not
//! match.

/// The fixed prefix a recognised XZ payload starts with.
pub const HEADER: [u8; 26] = [
    0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00, 0x00, 0x04, 0xe6, 0xd6, 0xb4, 0x46, 0x02, 0x00, 0x21, 0x01,
    0x16, 0x00, 0x00, 0x00, 0x74, 0x2f, 0xe5, 0xa3, 0x01, 0x00,
];

/// The 6-byte XZ stream magic.
pub const STREAM_MAGIC: [u8; 6] = [0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00];

/// Returns `true` if `data` starts with [`HEADER`].
#[inline]
pub fn is_xz(data: &[u8]) -> bool {
    data.starts_with(&HEADER)
}
