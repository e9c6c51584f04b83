//! Decompression dispatch for the four recognised formats.
//!
//! [`decompress`] takes a [`Format`] produced by [`crate::formats::detect`]
//! (or chosen by the caller) and runs the matching decoder over the whole
//! buffer. Every decoder error is converted to a [`DecompressError`]; none
//! escape as a panic.
//!
//! ## Submodules
//!
//! | Module     | Algorithm | Backing crate |
//! |------------|-----------|---------------|
//! | [`gzip`]   | gzip (single member) | `flate2` |
//! | [`xz`]     | XZ / LZMA2 | `xz2` |
//! | [`snappy`] | Snappy raw block or framed stream | `snap` |
//! | [`lz4`]    | LZ4 size-prepended block | `lz4_flex` |
//!
//! All decoders stop at `limit` output bytes and report
//! [`DecompressError::TooLarge`] instead of growing without bound.

use std::io::Read;

use crate::error::DecompressError;
use crate::formats::Format;
use crate::utils::read_bounded;

pub mod gzip;
pub mod lz4;
pub mod snappy;
pub mod xz;

/// Decompress `data` as `format`, producing at most `limit` bytes.
pub fn decompress(format: Format, data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressError> {
    if data.is_empty() {
        return Err(DecompressError::Empty(format));
    }
    let out = match format {
        Format::Gzip => gzip::decompress_gzip(data, limit),
        Format::Lzma => xz::decompress_xz(data, limit),
        Format::Snappy => snappy::decompress_snappy(data, limit),
        Format::Lz4Block => lz4::decompress_lz4(data, limit),
    }?;
    log::debug!("{format}: {} -> {} bytes", data.len(), out.len());
    Ok(out)
}

/// Drain a streaming decoder, mapping I/O failures to `format`.
pub(crate) fn drain<R: Read>(format: Format, r: R, limit: usize) -> Result<Vec<u8>, DecompressError> {
    read_bounded(r, limit)
        .map_err(|source| DecompressError::Stream { format, source })?
        .ok_or(DecompressError::TooLarge { format, limit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_error_for_every_format() {
        for format in Format::ALL {
            let err = decompress(format, &[], usize::MAX).unwrap_err();
            assert!(matches!(err, DecompressError::Empty(f) if f == format));
        }
    }

    #[test]
    fn garbage_fails_as_lz4() {
        let err = decompress(Format::Lz4Block, &[0xde, 0xad, 0xbe, 0xef, 0x01], 1024).unwrap_err();
        assert!(err.to_string().starts_with("lz4"), "{err}");
    }
}
