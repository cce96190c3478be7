//! Error types for envelope and framing operations.

use std::fmt;

/// Result type for envelope operations.
pub type WireResult<T> = Result<T, EnvelopeError>;

/// Errors that can occur while opening or unwrapping a save code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnvelopeError {
    /// The code has no `$` tag delimiter.
    MissingTag,

    /// The code has a tag but nothing after it.
    EmptyPayload,

    /// The payload is not valid base64.
    InvalidBase64,

    /// A `%` escape sequence is malformed.
    InvalidEscape {
        /// Byte offset of the bad escape within the input.
        position: usize,
    },

    /// Escape decoding produced bytes that are not valid UTF-8.
    InvalidEscapedText,
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTag => write!(f, "save code has no version tag"),
            Self::EmptyPayload => write!(f, "save code has an empty payload"),
            Self::InvalidBase64 => write!(f, "save code payload is not valid base64"),
            Self::InvalidEscape { position } => {
                write!(f, "malformed escape sequence at byte {position}")
            }
            Self::InvalidEscapedText => {
                write!(f, "escape decoding produced invalid text")
            }
        }
    }
}

impl std::error::Error for EnvelopeError {}
