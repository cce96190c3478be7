//! Lightweight, read-only save code previews.

use bitstream::BitReader;
use registry::{Registry, TableKind};
use wire::SaveFormat;

use crate::decode::remap_index;
use crate::encode::{CHARACTER_INDEX_BITS, DIFFICULTY_INDEX_BITS};
use crate::error::CodecResult;

/// Summary of a save code, extracted without materializing unlock sets or
/// touching any state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodePreview {
    /// `false` when the code could not be read at all.
    pub valid: bool,
    /// Version tag of the code, when one was present.
    pub version: Option<String>,
    pub high_score: u64,
    pub total_games: u64,
    pub has_run: bool,
    pub run: Option<RunPreview>,
    /// Human-readable reason when `valid` is `false`.
    pub error: Option<String>,
}

/// Run summary within a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunPreview {
    pub character: String,
    pub difficulty: String,
    pub current_wave: u64,
    pub endless: bool,
}

impl CodePreview {
    fn invalid(message: String) -> Self {
        Self {
            valid: false,
            version: None,
            high_score: 0,
            total_games: 0,
            has_run: false,
            run: None,
            error: Some(message),
        }
    }
}

/// Previews a save code without decoding it fully.
///
/// Never panics, never mutates anything, and never consults passphrases —
/// typing a partial code into an import box must not leak a hidden command.
/// Malformed input yields `valid: false` with a reason.
#[must_use]
pub fn preview_code(registry: &Registry, code: &str) -> CodePreview {
    let code = code.trim();
    let result = match wire::detect(code) {
        SaveFormat::Binary => preview_binary(registry, code),
        SaveFormat::LegacyText => preview_legacy(registry, code),
    };
    match result {
        Ok(preview) => preview,
        Err(err) => CodePreview::invalid(err.to_string()),
    }
}

fn preview_binary(registry: &Registry, code: &str) -> CodecResult<CodePreview> {
    let envelope = wire::open(code)?;
    let bytes = wire::decode_payload(envelope.payload)?;
    let mut reader = BitReader::new(&bytes);

    let high_score = reader.read_varint();
    let _total_kills = reader.read_varint();
    let _total_time_played = reader.read_varint();
    let total_games = reader.read_varint();

    // Skip the unlock bitmaps positionally; the registry lengths locate the
    // run section without materializing either set.
    let unlock_bits = registry.achievements().len() + registry.compendium().len();
    for _ in 0..unlock_bits {
        let _ = reader.read_bit();
    }

    let has_run = reader.read_bit();
    let run = if has_run {
        Some(preview_run(registry, &mut reader)?)
    } else {
        None
    };

    Ok(CodePreview {
        valid: true,
        version: Some(envelope.version.to_owned()),
        high_score,
        total_games,
        has_run,
        run,
        error: None,
    })
}

fn preview_run(registry: &Registry, reader: &mut BitReader<'_>) -> CodecResult<RunPreview> {
    let character_index = reader.read_bits(CHARACTER_INDEX_BITS) as usize;
    let difficulty_index = reader.read_bits(DIFFICULTY_INDEX_BITS) as usize;
    let character = remap_index(registry.characters(), TableKind::Characters, character_index)?;
    let difficulty = remap_index(
        registry.difficulties(),
        TableKind::Difficulties,
        difficulty_index,
    )?;

    let current_wave = reader.read_varint();
    let _gold = reader.read_varint();
    let _hp = reader.read_varint();
    let _max_hp = reader.read_varint();
    let _shield = reader.read_varint();
    let endless = reader.read_bit();

    Ok(RunPreview {
        character,
        difficulty,
        current_wave,
        endless,
    })
}

fn preview_legacy(registry: &Registry, code: &str) -> CodecResult<CodePreview> {
    let decoded = crate::legacy::decode_legacy(registry, code)?;
    let unwrapped = wire::unwrap_compressed(code)?;
    let version = wire::open(&unwrapped)?.version.to_owned();
    let snapshot = decoded.snapshot;

    let run = snapshot.run.as_ref().map(|run| RunPreview {
        character: run.character.clone(),
        difficulty: run.difficulty.clone(),
        current_wave: run.current_wave,
        endless: run.endless,
    });

    Ok(CodePreview {
        valid: true,
        version: Some(version),
        high_score: snapshot.progress.high_score,
        total_games: snapshot.progress.total_games_played,
        has_run: run.is_some(),
        run,
        error: None,
    })
}
