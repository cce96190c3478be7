use std::collections::BTreeSet;

use codec::{
    decode_save, encode_save, CodecLimits, GlobalProgress, RunSnapshot, SaveFormat, SaveSnapshot,
    UnlockSet,
};
use proptest::prelude::*;
use registry::Registry;

fn subset_of(ids: &[String], mask: u32) -> BTreeSet<String> {
    ids.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << (i % 32)) != 0)
        .map(|(_, id)| id.clone())
        .collect()
}

fn arb_progress() -> impl Strategy<Value = GlobalProgress> {
    // The varint read side caps at 35 bits; valid snapshots stay below it.
    let counter = 0u64..(1 << 35);
    (counter.clone(), counter.clone(), counter.clone(), counter).prop_map(
        |(high_score, total_kills, total_time_played, total_games_played)| GlobalProgress {
            high_score,
            total_kills,
            total_time_played,
            total_games_played,
        },
    )
}

fn arb_run(registry: &Registry) -> impl Strategy<Value = RunSnapshot> {
    let characters: Vec<String> = registry.characters().iter().map(str::to_owned).collect();
    let difficulties: Vec<String> = registry.difficulties().iter().map(str::to_owned).collect();
    let items: Vec<String> = registry.items().iter().map(str::to_owned).collect();

    (
        prop::sample::select(characters),
        prop::sample::select(difficulties),
        0u64..500,
        0i64..100_000,
        (0u32..5_000, 0u32..5_000, 0u32..1_000),
        any::<bool>(),
        0u64..300,
        prop::collection::vec(prop::sample::select(items), 0..12),
        prop::collection::vec(0u64..50, 0..6),
    )
        .prop_map(
            |(
                character,
                difficulty,
                current_wave,
                gold,
                (hp, max_hp, shield),
                endless,
                endless_wave,
                inventory,
                debts,
            )| RunSnapshot {
                character,
                difficulty,
                current_wave,
                gold,
                // Whole-valued so roundtrip equality is exact.
                hp: f64::from(hp),
                max_hp: f64::from(max_hp),
                shield: f64::from(shield),
                endless,
                endless_wave,
                inventory,
                debts,
            },
        )
}

fn arb_snapshot() -> impl Strategy<Value = SaveSnapshot> {
    let registry = Registry::standard();
    let achievements: Vec<String> = registry.achievements().iter().map(str::to_owned).collect();
    let compendium: Vec<String> = registry.compendium().iter().map(str::to_owned).collect();
    let achievement_sets =
        any::<u32>().prop_map(move |mask| subset_of(&achievements, mask));
    let compendium_sets = any::<u32>().prop_map(move |mask| subset_of(&compendium, mask));

    (
        arb_progress(),
        achievement_sets,
        compendium_sets,
        prop::option::of(arb_run(&Registry::standard())),
    )
        .prop_map(|(progress, achievements, compendium, run)| SaveSnapshot {
            progress,
            unlocks: UnlockSet {
                achievements,
                compendium,
            },
            run,
        })
}

proptest! {
    #[test]
    fn prop_roundtrip_reproduces_every_field(snapshot in arb_snapshot()) {
        let registry = Registry::standard();
        let code = encode_save(&registry, &snapshot).unwrap();
        let decoded = decode_save(&registry, &CodecLimits::default(), &code).unwrap();

        prop_assert_eq!(decoded.format, SaveFormat::Binary);
        prop_assert_eq!(decoded.snapshot, snapshot);
    }

    #[test]
    fn prop_codes_are_single_line_ascii(snapshot in arb_snapshot()) {
        let registry = Registry::standard();
        let code = encode_save(&registry, &snapshot).unwrap();
        prop_assert!(code.is_ascii());
        prop_assert!(!code.contains(char::is_whitespace));
    }

    #[test]
    fn prop_decode_arbitrary_text_never_panics(code in "\\PC{0,80}") {
        let registry = Registry::standard();
        let _ = decode_save(&registry, &CodecLimits::default(), &code);
        let preview = codec::preview_code(&registry, &code);
        if !preview.valid {
            prop_assert!(preview.error.is_some());
        }
    }
}

#[test]
fn roundtrip_with_every_unlock_set() {
    let registry = Registry::standard();
    let snapshot = SaveSnapshot {
        progress: GlobalProgress {
            high_score: 123_456,
            total_kills: 9_999,
            total_time_played: 1,
            total_games_played: 77,
        },
        unlocks: UnlockSet {
            achievements: registry.achievements().iter().map(str::to_owned).collect(),
            compendium: registry.compendium().iter().map(str::to_owned).collect(),
        },
        run: None,
    };

    let code = encode_save(&registry, &snapshot).unwrap();
    let decoded = decode_save(&registry, &CodecLimits::default(), &code).unwrap();
    assert_eq!(decoded.snapshot, snapshot);
}

#[test]
fn roundtrip_duplicate_inventory_entries_survive() {
    // Each occurrence is one unit owned; duplicates must not collapse.
    let registry = Registry::standard();
    let run = RunSnapshot {
        character: "harvester".to_owned(),
        difficulty: "apocalypse".to_owned(),
        current_wave: 21,
        gold: 15,
        hp: 44.0,
        max_hp: 44.0,
        shield: 10.0,
        endless: true,
        endless_wave: 1,
        inventory: vec![
            "lucky_coin".to_owned(),
            "lucky_coin".to_owned(),
            "medkit".to_owned(),
            "lucky_coin".to_owned(),
        ],
        debts: vec![12, 0, 3],
    };
    let snapshot = SaveSnapshot {
        run: Some(run.clone()),
        ..SaveSnapshot::default()
    };

    let code = encode_save(&registry, &snapshot).unwrap();
    let decoded = decode_save(&registry, &CodecLimits::default(), &code).unwrap();
    assert_eq!(decoded.snapshot.run.unwrap().inventory, run.inventory);
}

#[test]
fn codes_are_compact() {
    // A loaded late-game snapshot still fits comfortably in a chat message.
    let registry = Registry::standard();
    let snapshot = SaveSnapshot {
        progress: GlobalProgress {
            high_score: u64::from(u32::MAX),
            total_kills: 1_000_000,
            total_time_played: 30_000_000,
            total_games_played: 4_000,
        },
        unlocks: UnlockSet {
            achievements: registry.achievements().iter().map(str::to_owned).collect(),
            compendium: registry.compendium().iter().map(str::to_owned).collect(),
        },
        run: Some(RunSnapshot {
            character: "leech".to_owned(),
            difficulty: "apocalypse".to_owned(),
            current_wave: 99,
            gold: 99_999,
            hp: 400.0,
            max_hp: 400.0,
            shield: 120.0,
            endless: true,
            endless_wave: 79,
            inventory: registry.items().iter().map(str::to_owned).collect(),
            debts: vec![30; 6],
        }),
    };

    let code = encode_save(&registry, &snapshot).unwrap();
    assert!(
        code.len() < 200,
        "code should stay copy-pasteable, got {} chars",
        code.len()
    );
}
