//! Per-invocation configuration.

use crate::text::TextEncoding;

/// Default cap on decompressed output (64 MiB).
pub const DEFAULT_MAX_OUTPUT_LEN: usize = 64 * 1024 * 1024;

/// Options shared by every stage of the pipeline.
///
/// ```
/// use sniffpack::{Options, TextEncoding};
///
/// let opts = Options::new()
///     .with_encoding(TextEncoding::Latin1)
///     .with_max_output_len(1 << 20);
/// assert_eq!(opts.max_output_len, 1 << 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Encoding used to turn decompressed bytes into text.
    pub encoding: TextEncoding,
    /// Largest decompressed payload accepted, in bytes.
    pub max_output_len: usize,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_max_output_len(mut self, max_output_len: usize) -> Self {
        self.max_output_len = max_output_len;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::default(),
            max_output_len: DEFAULT_MAX_OUTPUT_LEN,
        }
    }
}
