//! The two actions the tool exposes and the reports they produce.
//!
//! * `validate` never fails: every error is folded into
//!   `{"valid": false, "message": ...}`. Decompression succeeding is
//!   enough, the text stage is not run.
//! * `decode` runs the full pipeline and fails with the error message.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::Options;
use crate::error::InvalidAction;
use crate::pipeline::{unpack, unpack_text};
use crate::text::literal;
use crate::{Result, json};

/// `format` value reported for decoded payloads.
pub const PLAIN_TEXT: &str = "plain_text";

/// What to do with the input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Decode,
    Validate,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Decode, Action::Validate];

    pub fn name(self) -> &'static str {
        match self {
            Action::Decode => "decode",
            Action::Validate => "validate",
        }
    }

    /// Run this action on `value` and render the JSON report line.
    ///
    /// Only [`Action::Decode`] returns `Err`.
    pub fn run(self, value: &str, opts: &Options) -> Result<String> {
        match self {
            Action::Validate => Ok(json::to_string(&validate(value, opts))?),
            Action::Decode => Ok(json::to_string(&decode(value, opts)?)?),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = InvalidAction;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| InvalidAction(s.to_owned()))
    }
}

/// Result of `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

/// Result of a successful `decode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Quoted literal of the decoded text.
    pub output: String,
    #[serde(rename = "read-only")]
    pub read_only: bool,
    pub format: &'static str,
}

/// Check that `value` decodes and decompresses.
pub fn validate(value: &str, opts: &Options) -> Validation {
    match unpack(value, opts) {
        Ok(_) => Validation {
            valid: true,
            message: String::new(),
        },
        Err(e) => {
            log::debug!("validation failed: {e}");
            Validation {
                valid: false,
                message: e.to_string(),
            }
        }
    }
}

/// Decode `value` all the way to text.
pub fn decode(value: &str, opts: &Options) -> Result<Decoded> {
    let text = unpack_text(value, opts)?;
    Ok(Decoded {
        output: literal(&text),
        read_only: true,
        format: PLAIN_TEXT,
    })
}
