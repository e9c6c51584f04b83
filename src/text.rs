//! Turning decompressed bytes into text, and text into a quoted literal.

use std::fmt;
use std::fmt::Write as _;

use crate::error::TextError;

/// Text encodings the decoder understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TextEncoding {
    /// Strict UTF-8.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "utf-8", alias = "utf8"))]
    Utf8,
    /// 7-bit ASCII; any byte above `0x7F` is an error.
    #[cfg_attr(feature = "cli", value(name = "ascii"))]
    Ascii,
    /// ISO-8859-1; every byte maps to the code point of the same value.
    #[cfg_attr(feature = "cli", value(name = "latin-1", alias = "latin1"))]
    Latin1,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode `bytes` as `encoding`.
pub fn decode_text(bytes: Vec<u8>, encoding: TextEncoding) -> Result<String, TextError> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| e.utf8_error().into()),
        TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
            Some(position) => Err(TextError::InvalidByte {
                encoding,
                byte: bytes[position],
                position,
            }),
            // all ASCII, therefore valid UTF-8
            None => String::from_utf8(bytes).map_err(|e| e.utf8_error().into()),
        },
        TextEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
    }
}

/// Render `text` as a quoted string literal.
///
/// Single quotes are used unless the text contains `'` and no `"`. The
/// active quote, backslash, tab, newline and carriage return get backslash
/// escapes; other control characters become `\xNN`, and non-printable
/// non-ASCII characters become `\xNN` / `\uNNNN` / `\UNNNNNNNN`.
/// Printable non-ASCII characters are kept as-is.
///
/// ```
/// assert_eq!(sniffpack::text::literal("hello"), "'hello'");
/// assert_eq!(sniffpack::text::literal("it's"), "\"it's\"");
/// assert_eq!(sniffpack::text::literal("a\tb\n"), r"'a\tb\n'");
/// ```
pub fn literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => {
                let cp = u32::from(c);
                // infallible: writing into a String
                let _ = match cp {
                    0..=0xff => write!(out, "\\x{cp:02x}"),
                    0x100..=0xffff => write!(out, "\\u{cp:04x}"),
                    _ => write!(out, "\\U{cp:08x}"),
                };
            }
        }
    }
    out.push(quote);
    out
}

/// Whether `c` is shown verbatim inside a literal.
///
/// Control characters, separators other than the ASCII space, common
/// invisible format characters and private-use code points are escaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        u32::from(c),
        0xad | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xd800..=0xdfff
            | 0xe000..=0xf8ff
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0xf0000..
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_strict() {
        assert_eq!(decode_text(b"h\xc3\xa9".to_vec(), TextEncoding::Utf8).unwrap(), "hé");
        let err = decode_text(b"h\xff".to_vec(), TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, TextError::Utf8(e) if e.valid_up_to() == 1));
    }

    #[test]
    fn ascii_reports_first_bad_byte() {
        let err = decode_text(b"ok\x80".to_vec(), TextEncoding::Ascii).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'ascii' codec can't decode byte 0x80 in position 2"
        );
    }

    #[test]
    fn latin1_never_fails() {
        let all: Vec<u8> = (0..=255).collect();
        let text = decode_text(all, TextEncoding::Latin1).unwrap();
        assert_eq!(text.chars().count(), 256);
        assert_eq!(text.chars().last(), Some('ÿ'));
    }

    #[test]
    fn literal_quote_selection() {
        assert_eq!(literal(""), "''");
        assert_eq!(literal("say \"hi\""), "'say \"hi\"'");
        assert_eq!(literal("it's"), "\"it's\"");
        assert_eq!(literal("it's \"x\""), r#"'it\'s "x"'"#);
    }

    #[test]
    fn literal_escapes() {
        assert_eq!(literal("a\\b"), r"'a\\b'");
        assert_eq!(literal("\r\n\t"), r"'\r\n\t'");
        assert_eq!(literal("\x00\x1b\x7f"), r"'\x00\x1b\x7f'");
        assert_eq!(literal("\u{85}"), r"'\x85'");
        assert_eq!(literal("\u{a0}"), r"'\xa0'");
        assert_eq!(literal("\u{200b}"), r"'\u200b'");
        assert_eq!(literal("\u{2028}"), r"'\u2028'");
        assert_eq!(literal("\u{f0000}"), r"'\U000f0000'");
    }

    #[test]
    fn literal_keeps_printable_unicode() {
        assert_eq!(literal("héllo ✓ 😀"), "'héllo ✓ 😀'");
    }
}
