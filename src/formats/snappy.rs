//! Snappy - structural validity scan for raw blocks and framed streams.
//!
//! Snappy has no magic number in its raw form, so recognition walks the
//! whole buffer and accepts it only if every element is consistent.
//!
//! ## Raw block
//! ```text
//! [varint]  Uncompressed length (LE base-128, <= 5 bytes, fits u32)
//! [...]     Elements until end of buffer
//! ```
//!
//! Each element starts with a tag byte; the low 2 bits select the kind:
//! ```text
//! 00  Literal   len = (tag >> 2) + 1, or for (tag >> 2) >= 60 the next
//!               (tag >> 2) - 59 bytes hold len - 1 (LE)
//! 01  Copy-1    len = 4 + ((tag >> 2) & 7), offset = (tag >> 5) << 8 | next byte
//! 10  Copy-2    len = (tag >> 2) + 1, offset = next 2 bytes (LE)
//! 11  Copy-4    len = (tag >> 2) + 1, offset = next 4 bytes (LE)
//! ```
//! Copies must reference already-produced output (`0 < offset <= produced`)
//! and the total produced must equal the declared length exactly.
//!
//! ## Framed stream
//! ```text
//! [0x00] Stream identifier  FF 06 00 00 "sNaPpY"
//! [...]  Chunks: type (u8) + length (u24 LE) + body
//! ```
//! | Type        | Body |
//! |-------------|------|
//! | `00`        | masked CRC-32C (4) + raw block, <= 65536 bytes decoded |
//! | `01`        | masked CRC-32C (4) + literal data, <= 65536 bytes |
//! | `02..=7F`   | reserved unskippable - invalid |
//! | `80..=FD`   | reserved skippable - ignored |
//! | `FE`        | padding - ignored |
//! | `FF`        | stream identifier, body must be `sNaPpY` |
//!
//! Checksums are not verified here; the frame decoder checks them during
//! decompression.

use crate::utils::ByteCursor;

/// The chunk that opens every framed Snappy stream.
pub const STREAM_IDENTIFIER: [u8; 10] = [0xff, 0x06, 0x00, 0x00, b's', b'N', b'a', b'P', b'p', b'Y'];

/// Largest decoded size of a single frame chunk.
pub const MAX_CHUNK_LEN: u32 = 65536;

const TAG_LITERAL: u8 = 0x00;
const TAG_COPY_1: u8 = 0x01;
const TAG_COPY_2: u8 = 0x02;

const CHUNK_COMPRESSED: u8 = 0x00;
const CHUNK_UNCOMPRESSED: u8 = 0x01;
const CHUNK_PADDING: u8 = 0xfe;
const CHUNK_STREAM_IDENTIFIER: u8 = 0xff;

const CHECKSUM_LEN: usize = 4;

/// Which Snappy container a buffer was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnappyLayout {
    /// A single raw block with a varint length prefix.
    Raw,
    /// A framed stream starting with [`STREAM_IDENTIFIER`].
    Framed,
}

/// Recognise `data` as a framed stream or a raw block.
///
/// Framed is tried first when the stream identifier is present; a buffer
/// that fails the framed scan may still be a valid raw block.
pub fn layout(data: &[u8]) -> Option<SnappyLayout> {
    if data.starts_with(&STREAM_IDENTIFIER) && is_valid_framed(data) {
        return Some(SnappyLayout::Framed);
    }
    if is_valid_raw(data) {
        return Some(SnappyLayout::Raw);
    }
    None
}

/// Returns `true` if `data` is structurally valid Snappy in either layout.
#[inline]
pub fn is_snappy(data: &[u8]) -> bool {
    layout(data).is_some()
}

/// Returns `true` if `data` is exactly one valid raw block.
pub fn is_valid_raw(data: &[u8]) -> bool {
    scan_block(data).is_some()
}

/// Walk a raw block and return its decoded length if it is consistent.
pub(crate) fn scan_block(data: &[u8]) -> Option<u32> {
    let mut cur = ByteCursor::new(data);
    let expected = u64::from(cur.varint32()?);
    let mut produced: u64 = 0;

    while !cur.is_empty() {
        let tag = cur.u8()?;
        let m = u64::from(tag >> 2);
        match tag & 0x03 {
            TAG_LITERAL => {
                let len = if m < 60 {
                    m + 1
                } else {
                    u64::from(cur.le_uint((m - 59) as usize)?) + 1
                };
                cur.bytes(usize::try_from(len).ok()?)?;
                produced += len;
            }
            kind => {
                let (len, offset) = match kind {
                    TAG_COPY_1 => {
                        let lo = u64::from(cur.u8()?);
                        (4 + (m & 0x07), (u64::from(tag >> 5) << 8) | lo)
                    }
                    TAG_COPY_2 => (m + 1, u64::from(cur.le_u16()?)),
                    _ => (m + 1, u64::from(cur.le_u32()?)),
                };
                if offset == 0 || offset > produced {
                    log::trace!("snappy copy offset {offset} outside {produced} produced bytes");
                    return None;
                }
                produced += len;
            }
        }
        if produced > expected {
            return None;
        }
    }

    (produced == expected).then_some(expected as u32)
}

/// Returns `true` if `data` is a complete, structurally valid framed stream.
pub fn is_valid_framed(data: &[u8]) -> bool {
    let Some(body) = data.strip_prefix(&STREAM_IDENTIFIER[..]) else {
        return false;
    };
    let mut cur = ByteCursor::new(body);

    while !cur.is_empty() {
        let Some(kind) = cur.u8() else { return false };
        let Some(len) = cur.le_u24() else { return false };
        let Some(chunk) = cur.bytes(len as usize) else {
            return false;
        };

        let ok = match kind {
            CHUNK_COMPRESSED => chunk
                .get(CHECKSUM_LEN..)
                .and_then(scan_block)
                .is_some_and(|n| n <= MAX_CHUNK_LEN),
            CHUNK_UNCOMPRESSED => {
                chunk.len() >= CHECKSUM_LEN && chunk.len() - CHECKSUM_LEN <= MAX_CHUNK_LEN as usize
            }
            CHUNK_STREAM_IDENTIFIER => chunk == &STREAM_IDENTIFIER[4..],
            CHUNK_PADDING | 0x80..=0xfd => true,
            // reserved unskippable
            _ => false,
        };
        if !ok {
            log::trace!("rejected framed snappy chunk of type 0x{kind:02x}, {len} bytes");
            return false;
        }
    }
    true
}
