//! Error types for codec operations.

use std::fmt;

use registry::TableKind;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during save encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Envelope or framing error.
    Envelope(wire::EnvelopeError),

    /// Bitstream error.
    Bitstream(bitstream::BitError),

    /// A registry index does not fit its fixed wire field.
    IndexOverflow {
        table: TableKind,
        index: usize,
        max: usize,
    },

    /// A registry table needed for index remapping has no entries.
    EmptyTable { table: TableKind },

    /// A length-prefixed list exceeds the decode limits.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific decode limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    InventoryItems,
    Debts,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Envelope(e) => write!(f, "envelope error: {e}"),
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::IndexOverflow { table, index, max } => {
                write!(f, "{table} index {index} does not fit the wire field (max {max})")
            }
            Self::EmptyTable { table } => {
                write!(f, "{table} table is empty, cannot remap an index")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InventoryItems => "inventory items",
            Self::Debts => "debts",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Envelope(e) => Some(e),
            Self::Bitstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::EnvelopeError> for CodecError {
    fn from(err: wire::EnvelopeError) -> Self {
        Self::Envelope(err)
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
