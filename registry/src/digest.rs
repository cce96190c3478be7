//! Deterministic registry digest.

use blake3::Hasher;

use crate::registry::Registry;
use crate::table::IdTable;

/// Computes a deterministic digest of the full registry contents.
///
/// Any change to any table — appended, renamed, reordered, or removed
/// entries — produces a different value. Pin the digest of a released
/// registry in a test together with [`Registry::is_extension_of`] to make
/// accidental history rewrites fail loudly instead of corrupting old codes.
#[must_use]
pub fn registry_digest(registry: &Registry) -> u64 {
    let mut hasher = Hasher::new();
    write_table(&mut hasher, 0, registry.characters());
    write_table(&mut hasher, 1, registry.difficulties());
    write_table(&mut hasher, 2, registry.achievements());
    write_table(&mut hasher, 3, registry.compendium());
    write_table(&mut hasher, 4, registry.items());

    let hash = hasher.finalize();
    let bytes = hash.as_bytes();
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

fn write_table(hasher: &mut Hasher, tag: u8, table: &IdTable) {
    write_u8(hasher, tag);
    write_u32(hasher, table.len() as u32);
    for id in table.iter() {
        write_u32(hasher, id.len() as u32);
        hasher.update(id.as_bytes());
    }
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}
