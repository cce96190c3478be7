//! Import/export orchestration over the host's persistent progress state.
//!
//! This module is the only place that reads or writes [`ProfileState`]. It
//! decides when a run is worth exporting, produces the final code text, and
//! applies the merge rules on import: `max` for counters, union for unlock
//! sets, wholesale replacement for the run.

use registry::Registry;

use crate::decode::decode_save;
use crate::encode::encode_save;
use crate::limits::CodecLimits;
use crate::preview::{preview_code, CodePreview};
use crate::snapshot::{GlobalProgress, RunSnapshot, SaveSnapshot, UnlockSet};

/// Sentinel returned by [`generate_code`] when encoding fails.
pub const ENCODE_FAILURE_SENTINEL: &str = "ERROR";

/// The run currently in progress on the host side.
///
/// Mirrors [`RunSnapshot`] plus the wave-lifecycle flag the export policy
/// needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRun {
    pub character: String,
    pub difficulty: String,
    pub wave: u64,
    /// `true` once the current wave has concluded (the player is in the
    /// shop/prep phase).
    pub wave_ended: bool,
    pub gold: i64,
    pub hp: f64,
    pub max_hp: f64,
    pub shield: f64,
    pub endless: bool,
    pub endless_wave: u64,
    pub inventory: Vec<String>,
    pub debts: Vec<u64>,
}

impl ActiveRun {
    /// A run is worth persisting once it has progressed past the very
    /// first, not-yet-concluded wave. Exporting earlier would share a
    /// "ghost" run that never actually started.
    #[must_use]
    pub fn is_meaningful(&self) -> bool {
        self.wave > 1 || self.wave_ended
    }

    fn to_snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            character: self.character.clone(),
            difficulty: self.difficulty.clone(),
            current_wave: self.wave,
            gold: self.gold,
            hp: self.hp,
            max_hp: self.max_hp,
            shield: self.shield,
            endless: self.endless,
            endless_wave: self.endless_wave,
            inventory: self.inventory.clone(),
            debts: self.debts.clone(),
        }
    }

    /// Rebuilds host run state from an imported snapshot.
    ///
    /// The wave is marked as already ended so the UI lands in the prep
    /// phase instead of mid-combat.
    #[must_use]
    pub fn from_snapshot(run: RunSnapshot) -> Self {
        Self {
            character: run.character,
            difficulty: run.difficulty,
            wave: run.current_wave,
            wave_ended: true,
            gold: run.gold,
            hp: run.hp,
            max_hp: run.max_hp,
            shield: run.shield,
            endless: run.endless,
            endless_wave: run.endless_wave,
            inventory: run.inventory,
            debts: run.debts,
        }
    }
}

/// The host's persistent progress state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub progress: GlobalProgress,
    pub unlocks: UnlockSet,
    pub run: Option<ActiveRun>,
}

/// Recognizes fixed secret passphrases before any decoding is attempted.
///
/// The import path asks this collaborator first; a match short-circuits the
/// decode entirely. Previews never consult it.
pub trait PassphraseInterceptor {
    /// Returns the response message when `code` is a known passphrase.
    fn intercept(&self, code: &str) -> Option<String>;
}

/// A fixed passphrase table.
#[derive(Debug, Clone, Default)]
pub struct PassphraseTable {
    entries: Vec<(String, String)>,
}

impl PassphraseTable {
    /// Builds a table from `(passphrase, response)` pairs.
    #[must_use]
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// The passphrases shipped with the game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            (
                "gilded_husk".to_owned(),
                "The compendium hums in approval.".to_owned(),
            ),
            (
                "debt_forgiven".to_owned(),
                "Your ledger is clean. This time.".to_owned(),
            ),
        ])
    }
}

impl PassphraseInterceptor for PassphraseTable {
    fn intercept(&self, code: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(phrase, _)| phrase == code)
            .map(|(_, response)| response.clone())
    }
}

/// What happened when a code was imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The code was a secret passphrase; nothing was decoded.
    Intercepted { message: String },
    /// The code decoded and merged into the profile.
    Imported { run_restored: bool, message: String },
    /// The code could not be read; the profile is untouched.
    Rejected { message: String },
}

/// Produces the shareable code for a profile.
///
/// A run is included only when `include_run` is set *and* the run is
/// meaningful (see [`ActiveRun::is_meaningful`]). Any encode failure yields
/// [`ENCODE_FAILURE_SENTINEL`] instead of an error.
#[must_use]
pub fn generate_code(registry: &Registry, profile: &ProfileState, include_run: bool) -> String {
    let run = if include_run {
        profile
            .run
            .as_ref()
            .filter(|run| run.is_meaningful())
            .map(ActiveRun::to_snapshot)
    } else {
        None
    };

    let snapshot = SaveSnapshot {
        progress: profile.progress,
        unlocks: profile.unlocks.clone(),
        run,
    };

    match encode_save(registry, &snapshot) {
        Ok(code) => code,
        Err(_) => ENCODE_FAILURE_SENTINEL.to_owned(),
    }
}

/// Previews a code without touching state or passphrases.
#[must_use]
pub fn get_preview(registry: &Registry, code: &str) -> CodePreview {
    preview_code(registry, code)
}

/// Imports a code into the profile.
///
/// Passphrases short-circuit before any decoding. A decode failure leaves
/// the profile untouched; the merge only starts once the whole code has
/// decoded.
pub fn import_code(
    profile: &mut ProfileState,
    registry: &Registry,
    interceptor: &dyn PassphraseInterceptor,
    limits: &CodecLimits,
    code: &str,
) -> ImportOutcome {
    let code = code.trim();
    if let Some(message) = interceptor.intercept(code) {
        return ImportOutcome::Intercepted { message };
    }

    let decoded = match decode_save(registry, limits, code) {
        Ok(decoded) => decoded,
        Err(err) => {
            return ImportOutcome::Rejected {
                message: format!("That code could not be read: {err}."),
            }
        }
    };

    let SaveSnapshot {
        progress,
        unlocks,
        run,
    } = decoded.snapshot;

    profile.progress.merge_max(&progress);
    profile.unlocks.union_with(&unlocks);

    let run_restored = run.is_some();
    // Either restore the imported run or clear the current one; keeping a
    // stale run alongside freshly imported stats would be a phantom.
    profile.run = run.map(ActiveRun::from_snapshot);

    let message = if run_restored {
        "Progress imported. Your run resumes at the shop.".to_owned()
    } else {
        "Progress imported. The code carried no run in progress.".to_owned()
    };
    ImportOutcome::Imported {
        run_restored,
        message,
    }
}
