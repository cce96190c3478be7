//! Version tag, base64 payload, and format detection.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{EnvelopeError, WireResult};
use crate::legacy::{ESCAPE_CHAR, SECTION_DELIMITER};

/// Version tag of the current binary save format.
///
/// This value identifies the bit-packed payload layout and must never be
/// reused for a different layout.
pub const VERSION_TAG: &str = "V3";

/// Delimiter between the version tag and the payload.
pub const TAG_DELIMITER: char = '$';

/// A save code split into its version tag and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// The version tag before the first `$`.
    pub version: &'a str,
    /// Everything after the first `$`.
    pub payload: &'a str,
}

/// The two on-disk shapes a save code can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveFormat {
    /// Current format: `"V3$" + base64(bitstream)`.
    Binary,
    /// Older format: `"<tag>$" + "|"-separated text sections.
    LegacyText,
}

/// Wraps a base64 payload in the current version tag.
#[must_use]
pub fn seal(payload: &str) -> String {
    let mut code = String::with_capacity(VERSION_TAG.len() + 1 + payload.len());
    code.push_str(VERSION_TAG);
    code.push(TAG_DELIMITER);
    code.push_str(payload);
    code
}

/// Splits a code on the first `$` into tag and payload.
///
/// # Errors
///
/// Returns [`EnvelopeError::MissingTag`] when there is no delimiter and
/// [`EnvelopeError::EmptyPayload`] when nothing follows it.
pub fn open(code: &str) -> WireResult<Envelope<'_>> {
    let (version, payload) = code.split_once(TAG_DELIMITER).ok_or(EnvelopeError::MissingTag)?;
    if payload.is_empty() {
        return Err(EnvelopeError::EmptyPayload);
    }
    Ok(Envelope { version, payload })
}

/// Decides which decode path a code takes.
///
/// A code is [`SaveFormat::Binary`] only when it starts with the current
/// version tag and the remainder contains neither the legacy escape character
/// nor the legacy section delimiter. Everything else falls back to the
/// legacy text path, which is best-effort by contract.
#[must_use]
pub fn detect(code: &str) -> SaveFormat {
    let mut prefix = String::with_capacity(VERSION_TAG.len() + 1);
    prefix.push_str(VERSION_TAG);
    prefix.push(TAG_DELIMITER);

    match code.strip_prefix(&prefix) {
        Some(rest) if !rest.contains(ESCAPE_CHAR) && !rest.contains(SECTION_DELIMITER) => {
            SaveFormat::Binary
        }
        _ => SaveFormat::LegacyText,
    }
}

/// Encodes payload bytes as base64 (standard alphabet, padded).
#[must_use]
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a base64 payload.
///
/// # Errors
///
/// Returns [`EnvelopeError::InvalidBase64`] on malformed input. Callers
/// decide how to degrade; this layer never panics.
pub fn decode_payload(text: &str) -> WireResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|_| EnvelopeError::InvalidBase64)
}
