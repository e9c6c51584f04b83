//! Format recognition for compressed payloads.
//!
//! [`detect`] looks only at the raw bytes - it never decompresses anything
//! to confirm a guess. Checks run in a fixed priority order and the first
//! match wins:
//!
//! | Order | Module      | Format   | Recognised by |
//! |-------|-------------|----------|---------------|
//! | 1     | [`gzip`]    | gzip     | `1F 8B 08` magic + deflate method byte |
//! | 2     | [`xz`]      | LZMA/XZ  | fixed 26-byte stream + block header prefix |
//! | 3     | [`snappy`]  | Snappy   | structural scan of a raw block or framed stream |
//! | 4     | -           | LZ4 block | fallback when nothing else matches |
//!
//! The LZ4 block format has no signature at all, so it is the unconditional
//! default. Garbage therefore classifies as [`Format::Lz4Block`] and fails
//! later, in [`crate::compression::decompress`].

use std::fmt;

pub mod gzip;
pub mod snappy;
pub mod xz;

/// One of the four payload formats sniffpack understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Gzip,
    Lzma,
    Snappy,
    Lz4Block,
}

impl Format {
    /// All formats, in detection priority order.
    pub const ALL: [Format; 4] = [Format::Gzip, Format::Lzma, Format::Snappy, Format::Lz4Block];

    /// Short lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Format::Gzip => "gzip",
            Format::Lzma => "xz",
            Format::Snappy => "snappy",
            Format::Lz4Block => "lz4",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify `data`. Total: every input, including an empty one, gets
/// exactly one format.
pub fn detect(data: &[u8]) -> Format {
    let format = if gzip::is_gzip(data) {
        Format::Gzip
    } else if xz::is_xz(data) {
        Format::Lzma
    } else if snappy::is_snappy(data) {
        Format::Snappy
    } else {
        Format::Lz4Block
    };
    log::debug!("classified {} byte payload as {format}", data.len());
    format
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_through_to_lz4() {
        assert_eq!(detect(&[]), Format::Lz4Block);
    }

    #[test]
    fn short_prefixes_do_not_match() {
        assert_eq!(detect(&[0x1f, 0x8b]), Format::Lz4Block);
        assert_eq!(detect(&xz::HEADER[..25]), Format::Lz4Block);
    }

    #[test]
    fn magic_prefix_decides_regardless_of_tail() {
        let tail = b"\x05\x10hello";
        assert!(snappy::is_snappy(tail));

        let mut data = gzip::MAGIC.to_vec();
        data.extend_from_slice(tail);
        assert_eq!(detect(&data), Format::Gzip);

        let mut data = xz::HEADER.to_vec();
        data.extend_from_slice(tail);
        assert_eq!(detect(&data), Format::Lzma);
    }

    #[test]
    fn xz_header_is_recognised() {
        let mut data = xz::HEADER.to_vec();
        data.extend_from_slice(b"\x04hello");
        assert_eq!(detect(&data), Format::Lzma);
    }

    #[test]
    fn raw_snappy_block_is_recognised() {
        // len=5, literal of 5 bytes
        let data = b"\x05\x10hello";
        assert_eq!(detect(data), Format::Snappy);
    }

    #[test]
    fn random_bytes_default_to_lz4() {
        let data = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x11, 0x22];
        assert_eq!(detect(&data), Format::Lz4Block);
    }
}
