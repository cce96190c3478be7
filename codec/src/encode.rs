//! Snapshot → save code encoding.

use bitstream::BitWriter;
use registry::Registry;
use wire::{encode_payload, seal};

use crate::error::CodecResult;
use crate::snapshot::{RunSnapshot, SaveSnapshot};

/// Width of the character index field.
pub const CHARACTER_INDEX_BITS: u8 = 5;

/// Width of the difficulty index field.
pub const DIFFICULTY_INDEX_BITS: u8 = 3;

/// Encodes a snapshot into a sealed `"V3$..."` save code.
///
/// The field order below *is* the wire format and must not change:
/// global counters, achievement presence bits in registry order, compendium
/// presence bits, the has-run bit, then the run section. Unrecognized
/// character/difficulty ids encode as index 0; unrecognized items are
/// dropped before the item count is written.
///
/// # Errors
///
/// The only failure mode is a registry index that does not fit its fixed
/// wire field, which a registry within its capacity budget cannot produce.
pub fn encode_save(registry: &Registry, snapshot: &SaveSnapshot) -> CodecResult<String> {
    let mut writer = BitWriter::with_capacity(256);

    writer.write_varint(snapshot.progress.high_score);
    writer.write_varint(snapshot.progress.total_kills);
    writer.write_varint(snapshot.progress.total_time_played);
    writer.write_varint(snapshot.progress.total_games_played);

    for id in registry.achievements().iter() {
        writer.write_bit(snapshot.unlocks.achievements.contains(id));
    }
    for id in registry.compendium().iter() {
        writer.write_bit(snapshot.unlocks.compendium.contains(id));
    }

    match &snapshot.run {
        Some(run) => {
            writer.write_bit(true);
            encode_run(registry, run, &mut writer)?;
        }
        None => writer.write_bit(false),
    }

    Ok(seal(&encode_payload(&writer.finish())))
}

fn encode_run(registry: &Registry, run: &RunSnapshot, writer: &mut BitWriter) -> CodecResult<()> {
    let character = registry.characters().index_of(&run.character).unwrap_or(0);
    let difficulty = registry
        .difficulties()
        .index_of(&run.difficulty)
        .unwrap_or(0);
    writer.write_bits(character as u64, CHARACTER_INDEX_BITS)?;
    writer.write_bits(difficulty as u64, DIFFICULTY_INDEX_BITS)?;

    writer.write_varint(run.current_wave);
    writer.write_varint(clamp_unsigned(run.gold));
    writer.write_varint(ceil_unsigned(run.hp));
    writer.write_varint(ceil_unsigned(run.max_hp));
    writer.write_varint(ceil_unsigned(run.shield));

    writer.write_bit(run.endless);
    writer.write_varint(run.endless_wave);

    let item_indices: Vec<u64> = run
        .inventory
        .iter()
        .filter_map(|id| registry.items().index_of(id))
        .map(|index| index as u64)
        .collect();
    writer.write_varint(item_indices.len() as u64);
    for index in item_indices {
        writer.write_varint(index);
    }

    writer.write_varint(run.debts.len() as u64);
    for duration in &run.debts {
        writer.write_varint(*duration);
    }

    Ok(())
}

/// Negative values have no wire representation and clamp to zero.
fn clamp_unsigned(value: i64) -> u64 {
    value.max(0) as u64
}

/// Fractional values round up; NaN and negatives clamp to zero.
fn ceil_unsigned(value: f64) -> u64 {
    let value = value.ceil();
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}
