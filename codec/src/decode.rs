//! Save code → snapshot decoding.

use bitstream::BitReader;
use registry::{IdTable, Registry, TableKind};
use wire::SaveFormat;

use crate::encode::{CHARACTER_INDEX_BITS, DIFFICULTY_INDEX_BITS};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::legacy::decode_legacy;
use crate::limits::CodecLimits;
use crate::snapshot::{GlobalProgress, RunSnapshot, SaveSnapshot, UnlockSet};

/// A fully decoded save code.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSave {
    /// Which decode path produced this result.
    pub format: SaveFormat,
    pub snapshot: SaveSnapshot,
}

/// Decodes a save code, detecting the binary or legacy text format.
///
/// The binary path reverses the encoder exactly; a truncated payload reads
/// as zeroed fields rather than failing mid-stream. The legacy path is
/// best-effort by contract. Malformed input never panics.
///
/// # Errors
///
/// Returns [`CodecError::Envelope`] for a missing tag or undecodable
/// payload, and [`CodecError::LimitsExceeded`] when a run section declares
/// more list entries than `limits` allows.
pub fn decode_save(
    registry: &Registry,
    limits: &CodecLimits,
    code: &str,
) -> CodecResult<DecodedSave> {
    let code = code.trim();
    match wire::detect(code) {
        SaveFormat::Binary => decode_binary(registry, limits, code),
        SaveFormat::LegacyText => decode_legacy(registry, code),
    }
}

fn decode_binary(
    registry: &Registry,
    limits: &CodecLimits,
    code: &str,
) -> CodecResult<DecodedSave> {
    let envelope = wire::open(code)?;
    let bytes = wire::decode_payload(envelope.payload)?;
    let mut reader = BitReader::new(&bytes);

    let progress = GlobalProgress {
        high_score: reader.read_varint(),
        total_kills: reader.read_varint(),
        total_time_played: reader.read_varint(),
        total_games_played: reader.read_varint(),
    };

    let mut unlocks = UnlockSet::default();
    for id in registry.achievements().iter() {
        if reader.read_bit() {
            unlocks.achievements.insert(id.to_owned());
        }
    }
    for id in registry.compendium().iter() {
        if reader.read_bit() {
            unlocks.compendium.insert(id.to_owned());
        }
    }

    let run = if reader.read_bit() {
        Some(decode_run(registry, limits, &mut reader)?)
    } else {
        None
    };

    Ok(DecodedSave {
        format: SaveFormat::Binary,
        snapshot: SaveSnapshot {
            progress,
            unlocks,
            run,
        },
    })
}

fn decode_run(
    registry: &Registry,
    limits: &CodecLimits,
    reader: &mut BitReader<'_>,
) -> CodecResult<RunSnapshot> {
    let character_index = reader.read_bits(CHARACTER_INDEX_BITS) as usize;
    let difficulty_index = reader.read_bits(DIFFICULTY_INDEX_BITS) as usize;
    let character = remap_index(registry.characters(), TableKind::Characters, character_index)?;
    let difficulty = remap_index(
        registry.difficulties(),
        TableKind::Difficulties,
        difficulty_index,
    )?;

    let current_wave = reader.read_varint();
    let gold = reader.read_varint() as i64;
    let hp = reader.read_varint() as f64;
    let max_hp = reader.read_varint() as f64;
    let shield = reader.read_varint() as f64;

    let endless = reader.read_bit();
    let endless_wave = reader.read_varint();

    let item_count = usize::try_from(reader.read_varint()).unwrap_or(usize::MAX);
    if item_count > limits.max_items {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::InventoryItems,
            limit: limits.max_items,
            actual: item_count,
        });
    }
    let mut inventory = Vec::with_capacity(item_count);
    for _ in 0..item_count {
        let index = reader.read_varint() as usize;
        // Indices past the current item table are dropped, mirroring the
        // encoder's unknown-item rule.
        if let Some(id) = registry.items().id_at(index) {
            inventory.push(id.to_owned());
        }
    }

    let debt_count = usize::try_from(reader.read_varint()).unwrap_or(usize::MAX);
    if debt_count > limits.max_debts {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::Debts,
            limit: limits.max_debts,
            actual: debt_count,
        });
    }
    let mut debts = Vec::with_capacity(debt_count);
    for _ in 0..debt_count {
        debts.push(reader.read_varint());
    }

    Ok(RunSnapshot {
        character,
        difficulty,
        current_wave,
        gold,
        hp,
        max_hp,
        shield,
        endless,
        endless_wave,
        inventory,
        debts,
    })
}

/// Remaps a decoded index back to its id.
///
/// An index past the end of the table aliases to slot 0, mirroring the
/// encode direction for unrecognized ids.
pub(crate) fn remap_index(
    table: &IdTable,
    kind: TableKind,
    index: usize,
) -> CodecResult<String> {
    table
        .id_at(index)
        .or_else(|| table.id_at(0))
        .map(str::to_owned)
        .ok_or(CodecError::EmptyTable { table: kind })
}
