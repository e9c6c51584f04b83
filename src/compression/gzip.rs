//! gzip decompression via `flate2`.
//!
//! Only the first member is decoded; bytes after its trailer are ignored.
//! CRC-32 and ISIZE in the trailer are verified by the decoder.

use flate2::read::GzDecoder;

use super::drain;
use crate::error::DecompressError;
use crate::formats::Format;

/// Decompress a single gzip member.
pub fn decompress_gzip(data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressError> {
    drain(Format::Gzip, GzDecoder::new(data), limit)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn corrupt_trailer_is_reported() {
        let mut data = gzip(b"hello");
        let n = data.len();
        data[n - 8] ^= 0xff;
        let err = decompress_gzip(&data, 1024).unwrap_err();
        assert!(matches!(err, DecompressError::Stream { format: Format::Gzip, .. }));
    }

    #[test]
    fn truncated_member_is_reported() {
        let data = gzip(b"hello, hello, hello");
        assert!(decompress_gzip(&data[..data.len() / 2], 1024).is_err());
    }

    #[test]
    fn output_limit_is_enforced() {
        let data = gzip(&[b'a'; 4096]);
        assert_eq!(decompress_gzip(&data, 4096).unwrap().len(), 4096);
        let err = decompress_gzip(&data, 4095).unwrap_err();
        assert!(matches!(err, DecompressError::TooLarge { limit: 4095, .. }));
    }
}
