//! Introspection and debugging tools for wavecode save codes.
//!
//! This crate provides utilities for understanding what a code carries
//! without importing it anywhere:
//!
//! - Decode a code into structured JSON
//! - Preview a code the way the import dialog would
//! - Dump the registry tables and their digest
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use codec::{decode_save, preview_code, CodecLimits, CodecResult};
use registry::{registry_digest, Registry};
use serde_json::{json, Value};

/// Decodes a code and renders the result as JSON.
///
/// # Errors
///
/// Propagates the decode error for unreadable codes.
pub fn decode_report(registry: &Registry, limits: &CodecLimits, code: &str) -> CodecResult<Value> {
    let decoded = decode_save(registry, limits, code)?;
    let format = match decoded.format {
        codec::SaveFormat::Binary => "binary",
        codec::SaveFormat::LegacyText => "legacy-text",
    };
    Ok(json!({
        "format": format,
        "snapshot": decoded.snapshot,
    }))
}

/// Previews a code and renders the summary as JSON.
///
/// Unreadable codes are part of the output (`valid: false`), matching what
/// the import dialog shows.
#[must_use]
pub fn preview_report(registry: &Registry, code: &str) -> Value {
    let preview = preview_code(registry, code);
    json!(preview)
}

/// Renders the registry tables and digest as JSON.
#[must_use]
pub fn registry_report(registry: &Registry) -> Value {
    json!({
        "digest": format!("{:016x}", registry_digest(registry)),
        "characters": registry.characters().iter().collect::<Vec<_>>(),
        "difficulties": registry.difficulties().iter().collect::<Vec<_>>(),
        "achievements": registry.achievements().iter().collect::<Vec<_>>(),
        "compendium": registry.compendium().iter().collect::<Vec<_>>(),
        "items": registry.items().iter().collect::<Vec<_>>(),
    })
}
