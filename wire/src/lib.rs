//! Text envelope and legacy framing for the wavecode save codec.
//!
//! This crate handles the outermost layer of a save code: the version tag,
//! the base64 payload, detection of the current binary format versus the
//! older delimiter-based text format, and the escape-sequence shim for codes
//! produced by the oldest builds. It does not know what the payload means —
//! only how it is framed.
//!
//! # Design Principles
//!
//! - **Stable framing** - The tag delimiter and the current version tag are
//!   part of every code ever issued and must never change meaning.
//! - **No panics** - Malformed input surfaces as [`EnvelopeError`] values.
//! - **No domain knowledge** - This crate frames codes, it does not decode
//!   progress.

mod envelope;
mod error;
mod legacy;

pub use envelope::{
    decode_payload, detect, encode_payload, open, seal, Envelope, SaveFormat, TAG_DELIMITER,
    VERSION_TAG,
};
pub use error::{EnvelopeError, WireResult};
pub use legacy::{
    percent_decode, split_fields, split_sections, unwrap_compressed, ESCAPE_CHAR, FIELD_DELIMITER,
    SECTION_DELIMITER,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = VERSION_TAG;
        let _ = TAG_DELIMITER;
        let _ = SECTION_DELIMITER;
        let _ = FIELD_DELIMITER;
        let _ = ESCAPE_CHAR;
        let _ = SaveFormat::Binary;

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn seal_open_roundtrip() {
        let code = seal("AAEC");
        let envelope = open(&code).unwrap();
        assert_eq!(envelope.version, VERSION_TAG);
        assert_eq!(envelope.payload, "AAEC");
    }

    #[test]
    fn payload_roundtrip() {
        let bytes = [0x00, 0xAC, 0x02, 0xFF];
        let text = encode_payload(&bytes);
        assert_eq!(decode_payload(&text).unwrap(), bytes);
    }
}
