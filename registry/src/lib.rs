//! Append-only id dictionaries for the wavecode save codec.
//!
//! The registry is the single source of truth mapping domain ids (character
//! names, achievement ids, item names, ...) to the dense integer positions
//! the wire format stores. Encoder and decoder share one registry; a decoded
//! index means nothing without it.
//!
//! # Design Principles
//!
//! - **Append-only** - Existing entries are never reordered, renamed, or
//!   removed across versions. Old codes derive ids purely from position;
//!   violating this silently corrupts them into the wrong entity.
//!   [`Registry::is_extension_of`] turns that rule into a load-time check.
//! - **Capacity budgets** - Characters and difficulties live in fixed 5-bit
//!   and 3-bit wire fields, so their tables are capped at 32 and 8 entries.
//! - **Deterministic digest** - [`registry_digest`] hashes the full table
//!   contents so a drifted registry is detectable, not silent.

mod digest;
mod error;
mod registry;
mod standard;
mod table;

pub use digest::registry_digest;
pub use error::{RegistryError, RegistryResult, TableKind};
pub use registry::{Registry, RegistryBuilder, MAX_CHARACTERS, MAX_DIFFICULTIES};
pub use table::IdTable;
