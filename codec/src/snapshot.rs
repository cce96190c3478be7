//! Snapshot types: what a save code carries.

use std::collections::BTreeSet;

/// Cumulative lifetime counters.
///
/// Every field is monotonic: importing a code merges each counter with the
/// existing value via `max`, never decreasing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalProgress {
    pub high_score: u64,
    pub total_kills: u64,
    /// Total play time in ticks.
    pub total_time_played: u64,
    pub total_games_played: u64,
}

impl GlobalProgress {
    /// Merges `other` into `self`, keeping the larger of each counter.
    pub fn merge_max(&mut self, other: &Self) {
        self.high_score = self.high_score.max(other.high_score);
        self.total_kills = self.total_kills.max(other.total_kills);
        self.total_time_played = self.total_time_played.max(other.total_time_played);
        self.total_games_played = self.total_games_played.max(other.total_games_played);
    }
}

/// Unlocked content, membership only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockSet {
    pub achievements: BTreeSet<String>,
    pub compendium: BTreeSet<String>,
}

impl UnlockSet {
    /// Merges `other` into `self` via set union.
    ///
    /// Idempotent and order-irrelevant; an import never removes an unlock.
    pub fn union_with(&mut self, other: &Self) {
        self.achievements.extend(other.achievements.iter().cloned());
        self.compendium.extend(other.compendium.iter().cloned());
    }
}

/// An in-progress run.
///
/// Present only when a run is worth persisting. On import a run snapshot
/// replaces the current run wholesale; it is never field-merged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSnapshot {
    pub character: String,
    pub difficulty: String,
    pub current_wave: u64,
    /// Gold on hand. The overdraft mechanic allows negative values in-game,
    /// but the wire format has no sign bit: negative gold exports as 0.
    pub gold: i64,
    /// Hit points; encoded rounded up.
    pub hp: f64,
    pub max_hp: f64,
    pub shield: f64,
    pub endless: bool,
    pub endless_wave: u64,
    /// Item names in acquisition order; each occurrence is one unit owned.
    pub inventory: Vec<String>,
    /// Remaining-duration counters of outstanding debts.
    pub debts: Vec<u64>,
}

/// Everything one save code carries.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveSnapshot {
    pub progress: GlobalProgress,
    pub unlocks: UnlockSet,
    pub run: Option<RunSnapshot>,
}
