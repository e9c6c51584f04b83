//! Snappy decompression via `snap`.
//!
//! The container is chosen by the same structural scan the classifier uses
//! ([`crate::formats::snappy::layout`]): framed streams go through
//! [`snap::read::FrameDecoder`], which also verifies the per-chunk
//! CRC-32C; everything else is handed to the raw block decoder.

use snap::raw::{Decoder, decompress_len};
use snap::read::FrameDecoder;

use super::drain;
use crate::error::DecompressError;
use crate::formats::Format;
use crate::formats::snappy::{SnappyLayout, layout};

/// Decompress a Snappy raw block or framed stream.
pub fn decompress_snappy(data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressError> {
    match layout(data) {
        Some(SnappyLayout::Framed) => drain(Format::Snappy, FrameDecoder::new(data), limit),
        Some(SnappyLayout::Raw) | None => decompress_raw(data, limit),
    }
}

fn decompress_raw(data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressError> {
    if decompress_len(data)? > limit {
        return Err(DecompressError::TooLarge {
            format: Format::Snappy,
            limit,
        });
    }
    Ok(Decoder::new().decompress_vec(data)?)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use snap::raw::Encoder;
    use snap::read::FrameEncoder;

    use super::*;

    fn framed(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        FrameEncoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn raw_block() {
        let data = Encoder::new().compress_vec(b"hello").unwrap();
        assert_eq!(decompress_snappy(&data, 1024).unwrap(), b"hello");
    }

    #[test]
    fn framed_stream() {
        let data = framed(b"hello, framed world");
        assert_eq!(layout(&data), Some(SnappyLayout::Framed));
        assert_eq!(decompress_snappy(&data, 1024).unwrap(), b"hello, framed world");
    }

    #[test]
    fn framed_checksum_mismatch_is_reported() {
        let mut data = framed(b"hello");
        // first byte of the data chunk's checksum
        data[14] ^= 0xff;
        let err = decompress_snappy(&data, 1024).unwrap_err();
        assert!(matches!(err, DecompressError::Stream { format: Format::Snappy, .. }));
    }

    #[test]
    fn raw_declared_length_over_limit() {
        let data = Encoder::new().compress_vec(&[b'q'; 2048]).unwrap();
        let err = decompress_snappy(&data, 2047).unwrap_err();
        assert!(matches!(err, DecompressError::TooLarge { .. }));
    }

    #[test]
    fn non_snappy_input_fails_in_raw_decoder() {
        let err = decompress_snappy(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff], 1024).unwrap_err();
        assert!(matches!(err, DecompressError::Snappy(_)));
    }
}
