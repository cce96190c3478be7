//! Best-effort decoding of the legacy delimiter-based text format.
//!
//! Layout: `"<tag>$" + section0 "|" section1 "|" section2 [...]`.
//! Section 0 is `;`-joined base-36 global counters, section 1 is `;`-joined
//! unlocked achievement ids, section 2 is the literal `"0"` when no run is
//! in progress or `;`-joined run fields otherwise. The oldest builds also
//! escaped and base64-wrapped the whole code; the wire shim reverses that
//! first.
//!
//! Best-effort by contract: an unparseable field degrades to its default,
//! only a missing envelope is fatal.

use registry::Registry;
use wire::SaveFormat;

use crate::decode::DecodedSave;
use crate::error::CodecResult;
use crate::snapshot::{GlobalProgress, RunSnapshot, SaveSnapshot, UnlockSet};

/// Index of the character name within a legacy run section.
const RUN_CHARACTER: usize = 0;
/// Index of the difficulty name.
const RUN_DIFFICULTY: usize = 1;
/// Index of the current wave (base-36).
const RUN_WAVE: usize = 2;
/// Index of the gold amount (base-36, sign allowed).
const RUN_GOLD: usize = 3;
/// Indices of hp / max hp / shield (base-36).
const RUN_HP: usize = 4;
const RUN_MAX_HP: usize = 5;
const RUN_SHIELD: usize = 6;
/// Index of the endless flag (`"1"` when set).
const RUN_ENDLESS: usize = 8;

/// Marker section meaning "no run in progress".
const NO_RUN: &str = "0";

pub(crate) fn decode_legacy(registry: &Registry, code: &str) -> CodecResult<DecodedSave> {
    let unwrapped = wire::unwrap_compressed(code)?;
    let envelope = wire::open(&unwrapped)?;
    let sections = wire::split_sections(envelope.payload);

    let progress = parse_stats(sections.first().copied().unwrap_or(""));

    let mut unlocks = UnlockSet::default();
    if let Some(section) = sections.get(1) {
        for id in wire::split_fields(section) {
            if registry.achievements().contains(id) {
                unlocks.achievements.insert(id.to_owned());
            }
        }
    }

    let run = match sections.get(2) {
        None => None,
        Some(&NO_RUN) => None,
        Some(section) => parse_run(registry, section),
    };

    Ok(DecodedSave {
        format: SaveFormat::LegacyText,
        snapshot: SaveSnapshot {
            progress,
            unlocks,
            run,
        },
    })
}

fn parse_stats(section: &str) -> GlobalProgress {
    let fields = wire::split_fields(section);
    GlobalProgress {
        high_score: parse_base36(fields.first()),
        total_kills: parse_base36(fields.get(1)),
        total_time_played: parse_base36(fields.get(2)),
        total_games_played: parse_base36(fields.get(3)),
    }
}

fn parse_run(registry: &Registry, section: &str) -> Option<RunSnapshot> {
    let fields = wire::split_fields(section);
    let character = fields.get(RUN_CHARACTER).copied().filter(|f| !f.is_empty())?;

    let difficulty = fields
        .get(RUN_DIFFICULTY)
        .copied()
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| registry.difficulties().id_at(0).unwrap_or_default());

    Some(RunSnapshot {
        character: character.to_owned(),
        difficulty: difficulty.to_owned(),
        current_wave: parse_base36(fields.get(RUN_WAVE)),
        gold: parse_base36_signed(fields.get(RUN_GOLD)),
        hp: parse_base36(fields.get(RUN_HP)) as f64,
        max_hp: parse_base36(fields.get(RUN_MAX_HP)) as f64,
        shield: parse_base36(fields.get(RUN_SHIELD)) as f64,
        endless: fields.get(RUN_ENDLESS).copied() == Some("1"),
        endless_wave: 0,
        inventory: Vec::new(),
        debts: Vec::new(),
    })
}

fn parse_base36(field: Option<&&str>) -> u64 {
    field
        .and_then(|f| u64::from_str_radix(f.trim(), 36).ok())
        .unwrap_or(0)
}

fn parse_base36_signed(field: Option<&&str>) -> i64 {
    field
        .and_then(|f| i64::from_str_radix(f.trim(), 36).ok())
        .unwrap_or(0)
}
