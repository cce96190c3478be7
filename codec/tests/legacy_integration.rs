use codec::{
    decode_save, import_code, CodecLimits, ImportOutcome, PassphraseTable, ProfileState,
    SaveFormat,
};
use registry::Registry;

#[test]
fn legacy_code_imports_into_a_fresh_profile() {
    let registry = Registry::standard();
    let limits = CodecLimits::default();
    let table = PassphraseTable::standard();

    let mut profile = ProfileState::default();
    let outcome = import_code(
        &mut profile,
        &registry,
        &table,
        &limits,
        "V2$10;5;100;2|first_blood;wave_five|0",
    );

    assert!(matches!(
        outcome,
        ImportOutcome::Imported {
            run_restored: false,
            ..
        }
    ));
    assert_eq!(profile.progress.high_score, 36);
    assert_eq!(profile.progress.total_kills, 5);
    assert!(profile.unlocks.achievements.contains("first_blood"));
    assert!(profile.unlocks.achievements.contains("wave_five"));
    assert!(profile.run.is_none());
}

#[test]
fn legacy_code_with_run_restores_it_at_the_shop() {
    let registry = Registry::standard();
    let limits = CodecLimits::default();
    let table = PassphraseTable::standard();

    let mut profile = ProfileState::default();
    let outcome = import_code(
        &mut profile,
        &registry,
        &table,
        &limits,
        "V2$0;0;0;0||acolyte;veteran;c;5k;a;f;2;;0",
    );

    assert!(matches!(
        outcome,
        ImportOutcome::Imported {
            run_restored: true,
            ..
        }
    ));
    let run = profile.run.unwrap();
    assert_eq!(run.character, "acolyte");
    assert_eq!(run.difficulty, "veteran");
    assert_eq!(run.wave, 12); // "c" in base-36
    assert_eq!(run.gold, 200); // "5k" in base-36
    assert!(run.wave_ended, "imported runs land in the prep phase");
    assert!(!run.endless);
}

#[test]
fn legacy_and_binary_paths_agree_on_format_tagging() {
    let registry = Registry::standard();
    let limits = CodecLimits::default();

    let legacy = decode_save(&registry, &limits, "V2$10;5;100;2|x|0").unwrap();
    assert_eq!(legacy.format, SaveFormat::LegacyText);

    let binary_code = codec::encode_save(&registry, &codec::SaveSnapshot::default()).unwrap();
    let binary = decode_save(&registry, &limits, &binary_code).unwrap();
    assert_eq!(binary.format, SaveFormat::Binary);
}

#[test]
fn current_tag_with_legacy_delimiters_takes_the_text_path() {
    // The detection heuristic is two-part: tag *and* absence of legacy
    // delimiters. A mixed code must not reach the bit reader.
    let registry = Registry::standard();
    let decoded = decode_save(
        &registry,
        &CodecLimits::default(),
        "V3$10;5;100;2|x|0",
    )
    .unwrap();
    assert_eq!(decoded.format, SaveFormat::LegacyText);
    assert_eq!(decoded.snapshot.progress.high_score, 36);
}

#[test]
fn compressed_era_code_roundtrips_through_the_shim() {
    let registry = Registry::standard();
    let limits = CodecLimits::default();

    // The oldest builds escaped the delimited text for URL transport.
    let decoded = decode_save(&registry, &limits, "V2%2410%3B5%3B100%3B2%7Cx%7C0").unwrap();
    assert_eq!(decoded.format, SaveFormat::LegacyText);
    assert_eq!(decoded.snapshot.progress.high_score, 36);
    assert_eq!(decoded.snapshot.progress.total_games_played, 2);
}

#[test]
fn malformed_legacy_codes_reject_without_state_changes() {
    let registry = Registry::standard();
    let limits = CodecLimits::default();
    let table = PassphraseTable::standard();

    for code in ["", "no tag at all", "%zz$broken escape", "V2$"] {
        let mut profile = ProfileState::default();
        let outcome = import_code(&mut profile, &registry, &table, &limits, code);
        assert!(
            matches!(outcome, ImportOutcome::Rejected { .. }),
            "{code:?} should be rejected"
        );
        assert_eq!(profile, ProfileState::default(), "{code:?} mutated state");
    }
}
