//! Snapshot encoding/decoding and import management for wavecode save codes.
//!
//! This is the main codec crate. It ties together bitstream, wire, and
//! registry to turn a player's progress into a short copy-pasteable code and
//! back: cumulative counters, unlocked content, and an optional in-progress
//! run. Decoding accepts both the current binary format and the older
//! delimiter-based text format.
//!
//! # Design Principles
//!
//! - **Bit-exact wire format** - Field order and widths are fixed and
//!   documented on [`encode_save`]; they are the compatibility contract.
//! - **No panics on input** - Malformed codes surface as [`CodecError`]
//!   values or degrade per the format's rules; they never crash the host.
//! - **Deterministic** - Same snapshot, same registry, same code.

mod decode;
mod encode;
mod error;
mod legacy;
mod limits;
mod manager;
mod preview;
mod snapshot;

pub use decode::{decode_save, DecodedSave};
pub use encode::{encode_save, CHARACTER_INDEX_BITS, DIFFICULTY_INDEX_BITS};
pub use error::{CodecError, CodecResult, LimitKind};
pub use limits::CodecLimits;
pub use manager::{
    generate_code, get_preview, import_code, ActiveRun, ImportOutcome, PassphraseInterceptor,
    PassphraseTable, ProfileState, ENCODE_FAILURE_SENTINEL,
};
pub use preview::{preview_code, CodePreview, RunPreview};
pub use snapshot::{GlobalProgress, RunSnapshot, SaveSnapshot, UnlockSet};
pub use wire::SaveFormat;
