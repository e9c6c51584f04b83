//! The decode -> classify -> decompress -> text pipeline.
//!
//! Every stage is a plain function over owned or borrowed buffers; nothing
//! is shared between invocations.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::compression::decompress;
use crate::config::Options;
use crate::formats::{Format, detect};
use crate::text::decode_text;
use crate::Result;

/// A payload that has been classified and decompressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unpacked {
    /// Format chosen by [`detect`].
    pub format: Format,
    /// Decompressed bytes.
    pub bytes: Vec<u8>,
}

/// Decode standard, padded base64. Malformed input is rejected, never
/// truncated.
pub fn decode_base64(value: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(value)?)
}

/// Base64-decode, classify and decompress `value`.
pub fn unpack(value: &str, opts: &Options) -> Result<Unpacked> {
    let raw = decode_base64(value)?;
    let format = detect(&raw);
    let bytes = decompress(format, &raw, opts.max_output_len)?;
    Ok(Unpacked { format, bytes })
}

/// Run the whole pipeline and return the decompressed text.
pub fn unpack_text(value: &str, opts: &Options) -> Result<String> {
    let Unpacked { bytes, .. } = unpack(value, opts)?;
    Ok(decode_text(bytes, opts.encoding)?)
}
