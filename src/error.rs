//! Library-wide error and result types.

use std::io;

use thiserror::Error;

use crate::formats::Format;
use crate::text::TextEncoding;

/// Result alias used throughout sniffpack.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between receiving base64 text and producing
/// decoded text.
///
/// The display strings are the user-facing messages printed by the CLI, so
/// each variant carries the stage prefix.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid standard base64.
    #[error("Cannot decode value: {0}")]
    Decode(#[from] base64::DecodeError),
    /// The payload could not be decompressed with the detected format.
    #[error("Cannot decompress value: {0}")]
    Decompress(#[from] DecompressError),
    /// The decompressed bytes are not text in the requested encoding.
    #[error("Cannot decode text: {0}")]
    Text(#[from] TextError),
    /// A report could not be rendered as JSON.
    #[error("Cannot render report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decompression failures, tagged with the format that was attempted.
#[derive(Debug, Error)]
pub enum DecompressError {
    /// There was nothing to decompress.
    #[error("{0} input is empty")]
    Empty(Format),
    /// A stream decoder (gzip, xz, framed snappy) reported corruption,
    /// truncation or a checksum mismatch.
    #[error("{format} stream: {source}")]
    Stream {
        format: Format,
        #[source]
        source: io::Error,
    },
    /// The LZ4 block decoder rejected the data.
    #[error("lz4 block: {0}")]
    Lz4(#[from] lz4_flex::block::DecompressError),
    /// The Snappy block decoder rejected the data.
    #[error("snappy block: {0}")]
    Snappy(#[from] snap::Error),
    /// An LZ4 size prefix claims more output than the block can encode.
    #[error("lz4 block declares {declared} bytes but {compressed} compressed bytes expand to at most {bound}")]
    ImplausibleSize {
        declared: usize,
        compressed: usize,
        bound: usize,
    },
    /// The output would exceed [`crate::Options::max_output_len`].
    #[error("{format} output exceeds the limit of {limit} bytes")]
    TooLarge { format: Format, limit: usize },
}

/// Text decoding failures.
#[derive(Debug, Error)]
pub enum TextError {
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),
    /// A byte outside the encoding's range.
    #[error("'{encoding}' codec can't decode byte 0x{byte:02x} in position {position}")]
    InvalidByte {
        encoding: TextEncoding,
        byte: u8,
        position: usize,
    },
}

/// The action name given to the dispatcher was not recognised.
#[derive(Debug, Error)]
#[error("Error: Invalid action {0}")]
pub struct InvalidAction(pub String);
