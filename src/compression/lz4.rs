//! LZ4 block decompression via `lz4_flex`.
//!
//! The payload is in the **size-prepended block format**: a little-endian
//! `u32` giving the decompressed byte count, immediately followed by the
//! raw LZ4 block (no frame header, no checksum). This matches the layout
//! produced by [`lz4_flex::compress_prepend_size`].
//!
//! Because LZ4 blocks carry no signature, this is where unrecognised input
//! ends up. The size prefix is checked against what the block could
//! possibly encode before anything is allocated, so four random bytes
//! cannot request gigabytes of output.

use lz4_flex::block::{DecompressError as BlockError, decompress_size_prepended};

use crate::error::DecompressError;
use crate::formats::Format;
use crate::utils::ByteCursor;

/// Length of the little-endian size prefix.
pub const SIZE_PREFIX_LEN: usize = 4;

/// Most output a single input byte of an LZ4 block can produce.
const MAX_EXPANSION: usize = 255;

/// Output a block too short for any match can still produce.
const EXPANSION_SLACK: usize = 24;

/// Upper bound on the decoded size of a `compressed`-byte LZ4 block.
#[inline]
pub fn max_decompressed_len(compressed: usize) -> usize {
    compressed
        .saturating_mul(MAX_EXPANSION)
        .saturating_add(EXPANSION_SLACK)
}

/// Decompress a size-prepended LZ4 block.
pub fn decompress_lz4(data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressError> {
    let mut cur = ByteCursor::new(data);
    let declared = cur.le_u32().ok_or(BlockError::ExpectedAnotherByte)? as usize;
    let compressed = cur.remaining();

    let bound = max_decompressed_len(compressed);
    if declared > bound {
        return Err(DecompressError::ImplausibleSize {
            declared,
            compressed,
            bound,
        });
    }
    if declared > limit {
        return Err(DecompressError::TooLarge {
            format: Format::Lz4Block,
            limit,
        });
    }

    Ok(decompress_size_prepended(data)?)
}
