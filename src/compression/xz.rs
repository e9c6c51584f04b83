//! XZ decompression via `xz2` (liblzma).

use xz2::read::XzDecoder;

use super::drain;
use crate::error::DecompressError;
use crate::formats::Format;

/// Decompress one XZ stream.
pub fn decompress_xz(data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressError> {
    drain(Format::Lzma, XzDecoder::new(data), limit)
}
