//! **sniffpack** - detect and decompress base64-encoded compressed blobs.
//!
//! Given an opaque payload, sniffpack works out which compressor produced
//! it by looking at its leading bytes, decompresses it in one go, and
//! reports either validity or the decoded text.
//!
//! # Supported formats
//! | Priority | Module | Format |
//! |----------|--------|--------|
//! | 1 | [`formats::gzip`]   | gzip, single member |
//! | 2 | [`formats::xz`]     | LZMA2 in an XZ container (default liblzma preset) |
//! | 3 | [`formats::snappy`] | Snappy raw block or framed stream |
//! | 4 | [`compression::lz4`] | LZ4 size-prepended block (fallback) |
//!
//! # Example
//! ```
//! use sniffpack::{Action, Options};
//!
//! let line = Action::Decode
//!     .run("H4sIAAAAAAACA8tIzcnJBwCGphA2BQAAAA==", &Options::default())
//!     .unwrap();
//! assert_eq!(line, r#"{"output": "'hello'", "read-only": true, "format": "plain_text"}"#);
//! ```

pub mod action;
pub mod compression;
pub mod config;
pub mod error;
pub mod formats;
pub mod json;
pub mod pipeline;
pub mod text;
mod utils;

pub use action::{Action, Decoded, Validation, decode, validate};
pub use config::Options;
pub use error::{DecompressError, Error, InvalidAction, Result, TextError};
pub use formats::{Format, detect};
pub use pipeline::{Unpacked, decode_base64, unpack, unpack_text};
pub use text::TextEncoding;
