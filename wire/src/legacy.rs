//! Framing helpers for the legacy delimiter-based text format.

use crate::envelope::{decode_payload, TAG_DELIMITER};
use crate::error::{EnvelopeError, WireResult};

/// Separates the sections of a legacy payload.
pub const SECTION_DELIMITER: char = '|';

/// Separates the fields within a legacy section.
pub const FIELD_DELIMITER: char = ';';

/// Escape character of the oldest compressed codes.
pub const ESCAPE_CHAR: char = '%';

/// Splits a legacy payload into its `|`-separated sections.
#[must_use]
pub fn split_sections(payload: &str) -> Vec<&str> {
    payload.split(SECTION_DELIMITER).collect()
}

/// Splits a legacy section into its `;`-separated fields.
#[must_use]
pub fn split_fields(section: &str) -> Vec<&str> {
    section.split(FIELD_DELIMITER).collect()
}

/// Decodes `%xx` escape sequences into the text they stand for.
///
/// Escapes encode UTF-8 bytes, so decoding collects bytes first and converts
/// once at the end.
///
/// # Errors
///
/// Returns [`EnvelopeError::InvalidEscape`] for a truncated or non-hex escape
/// and [`EnvelopeError::InvalidEscapedText`] when the decoded bytes are not
/// valid UTF-8.
pub fn percent_decode(text: &str) -> WireResult<String> {
    let raw = text.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut idx = 0;
    while idx < raw.len() {
        if raw[idx] == b'%' {
            let hex = raw
                .get(idx + 1..idx + 3)
                .ok_or(EnvelopeError::InvalidEscape { position: idx })?;
            let hex = std::str::from_utf8(hex)
                .map_err(|_| EnvelopeError::InvalidEscape { position: idx })?;
            let byte = u8::from_str_radix(hex, 16)
                .map_err(|_| EnvelopeError::InvalidEscape { position: idx })?;
            bytes.push(byte);
            idx += 3;
        } else {
            bytes.push(raw[idx]);
            idx += 1;
        }
    }
    String::from_utf8(bytes).map_err(|_| EnvelopeError::InvalidEscapedText)
}

/// Reverses the compression scheme of the oldest codes.
///
/// Those builds base64-wrapped the delimited text and then escaped the
/// result for URL transport. When the input carries no escape character it is
/// returned unchanged; otherwise it is unescaped and, if the unescaped text
/// still has no tag delimiter, base64-unwrapped back to the delimited form.
///
/// # Errors
///
/// Propagates escape and base64 errors; returns
/// [`EnvelopeError::MissingTag`] when unwrapping does not yield a tagged
/// code.
pub fn unwrap_compressed(code: &str) -> WireResult<String> {
    if !code.contains(ESCAPE_CHAR) {
        return Ok(code.to_owned());
    }
    let unescaped = percent_decode(code)?;
    if unescaped.contains(TAG_DELIMITER) {
        return Ok(unescaped);
    }
    let bytes = decode_payload(unescaped.trim())?;
    let text = String::from_utf8(bytes).map_err(|_| EnvelopeError::InvalidEscapedText)?;
    if text.contains(TAG_DELIMITER) {
        Ok(text)
    } else {
        Err(EnvelopeError::MissingTag)
    }
}
