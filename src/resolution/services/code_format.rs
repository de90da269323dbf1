//! Decoder for the compact `{key:value,key:value}` micro-format found in
//! scanned QR payloads.
//!
//! Decoding happens in two explicit stages:
//! 1. [`DecodedFields::parse`] tokenizes the text into a string map, skipping
//!    malformed tokens instead of failing on scanner noise.
//! 2. Sub-formats project that map onto their own fields through [`FieldSpec`]
//!    declarations, coercing types and failing loudly on bad or missing values.

use std::collections::HashMap;
use thiserror::Error;

/// Projection failure for a single tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("required tag '{tag}' is missing")]
    MissingTag { tag: &'static str },

    #[error("tag '{tag}' has value '{value}', expected {expected}")]
    InvalidValue {
        tag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("payload rejected: {reason}")]
    Rejected { reason: String },
}

/// Declares how a tag in the micro-format maps onto a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub tag: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(tag: &'static str) -> Self {
        Self {
            tag,
            required: true,
        }
    }

    pub const fn optional(tag: &'static str) -> Self {
        Self {
            tag,
            required: false,
        }
    }
}

/// Removes surrounding whitespace and one pair of outer braces, if present
pub fn strip_braces(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('{').unwrap_or(trimmed);
    trimmed.strip_suffix('}').unwrap_or(trimmed)
}

/// Generic tag → value map produced by the tokenizing stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedFields {
    entries: HashMap<String, String>,
}

impl DecodedFields {
    /// Tokenizes a brace-wrapped, comma-separated list of `key:value` pairs.
    ///
    /// Tokens without exactly one `:` are skipped. When a key repeats, the
    /// last occurrence wins.
    pub fn parse(raw: &str) -> Self {
        let mut entries = HashMap::new();

        for token in strip_braces(raw).split(',') {
            let Some((key, value)) = token.split_once(':') else {
                continue;
            };
            if value.contains(':') {
                continue;
            }
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        Self { entries }
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projects a text field. Blank values count as absent.
    pub fn text(&self, field: FieldSpec) -> Result<Option<String>, DecodeError> {
        match self.get(field.tag).filter(|v| !v.is_empty()) {
            Some(value) => Ok(Some(value.to_string())),
            None if field.required => Err(DecodeError::MissingTag { tag: field.tag }),
            None => Ok(None),
        }
    }

    /// Projects an unsigned integer field.
    ///
    /// A present value that does not coerce is an error even for optional
    /// fields; it is never replaced by a default.
    pub fn unsigned(&self, field: FieldSpec) -> Result<Option<u32>, DecodeError> {
        match self.get(field.tag).filter(|v| !v.is_empty()) {
            Some(value) => value
                .parse::<u32>()
                .map(Some)
                .map_err(|_| DecodeError::InvalidValue {
                    tag: field.tag,
                    value: value.to_string(),
                    expected: "an unsigned integer",
                }),
            None if field.required => Err(DecodeError::MissingTag { tag: field.tag }),
            None => Ok(None),
        }
    }
}
