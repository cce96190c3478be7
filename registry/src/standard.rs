//! The shipped game dictionaries.
//!
//! These tables are the positional ground truth for every code ever minted.
//! New entries go at the END of their table. Never insert, reorder, rename,
//! or delete — `Registry::is_extension_of` exists to catch exactly that.

use crate::registry::Registry;

const CHARACTERS: &[&str] = &[
    "drifter",
    "warden",
    "pyro",
    "acolyte",
    "gunner",
    "harvester",
    "sentinel",
    "leech",
];

const DIFFICULTIES: &[&str] = &["standard", "veteran", "nightmare", "apocalypse"];

const ACHIEVEMENTS: &[&str] = &[
    "first_blood",
    "wave_five",
    "wave_ten",
    "wave_twenty",
    "endless_ten",
    "hoarder",
    "pacifist_wave",
    "debt_free",
    "full_sweep",
    "glass_cannon",
    "overdraft_survivor",
    "collector",
];

const COMPENDIUM: &[&str] = &[
    "husk",
    "spitter",
    "charger",
    "weaver",
    "brood_mother",
    "shard_wisp",
    "dreadnought",
    "tick_swarm",
    "warden_shade",
    "gilded_husk",
];

const ITEMS: &[&str] = &[
    "rusty_blade",
    "hunting_bow",
    "scrap_armor",
    "lucky_coin",
    "medkit",
    "frag_canister",
    "static_coil",
    "bone_charm",
    "lead_boots",
    "scavenger_pack",
    "thorn_ring",
    "glass_dagger",
    "ember_core",
    "anchor_plate",
    "debt_ledger",
    "echo_bell",
];

impl Registry {
    /// The registry shipped with the game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            to_owned(CHARACTERS),
            to_owned(DIFFICULTIES),
            to_owned(ACHIEVEMENTS),
            to_owned(COMPENDIUM),
            to_owned(ITEMS),
        )
        .expect("standard registry must be valid")
    }
}

fn to_owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}
