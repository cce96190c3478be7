//! Low-level bit packing primitives for the wavecode save codec.
//!
//! This crate provides [`BitWriter`] and [`BitReader`] for bit-level encoding
//! and decoding of save payloads. The two sides are separate types with
//! independent cursors: the writer owns a growable byte buffer, the reader
//! borrows a byte slice.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **LSB-first bit order** - Bit `n` of a byte is the `n`-th bit written.
//!   This is the order the save wire format is defined in and must not change.
//! - **Total reads** - Reading past the end of the buffer yields zero rather
//!   than failing. A truncated or garbage payload degrades to zeroed fields;
//!   rejection happens at the envelope layer, not here.
//! - **No domain knowledge** - This crate knows nothing about runs, unlocks,
//!   or registries.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bits(42, 7).unwrap();
//! writer.write_varint(300);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit());
//! assert_eq!(reader.read_bits(7), 42);
//! assert_eq!(reader.read_varint(), 300);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BitError, BitResult};
pub use reader::BitReader;
pub use writer::BitWriter;

/// Maximum number of LEB128 continuation groups accepted on read (35 bits).
///
/// Values requiring more groups are silently truncated, never rejected. This
/// bounds the damage a malformed continuation-bit stream can do.
pub const VARINT_MAX_GROUPS: usize = 5;
