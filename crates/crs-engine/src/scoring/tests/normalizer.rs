use crate::scoring::domain::{LanguageSkill, ProficiencyProfile, MINIMUM_LEVEL};
use crate::scoring::language::{normalize, LanguageTest, RawScores};

#[test]
fn ielts_bands_map_to_standard_levels() {
    let cases = [
        (9.0, 10),
        (8.5, 9),
        (8.0, 8),
        (7.0, 8),
        (6.5, 7),
        (6.0, 6),
        (5.5, 5),
        (5.0, 4),
        (4.5, 3),
        (4.0, 3),
    ];

    for (raw, expected) in cases {
        assert_eq!(
            LanguageTest::Ielts.level_for(LanguageSkill::Speaking, raw),
            expected,
            "IELTS {raw}"
        );
    }
}

#[test]
fn banded_tests_floor_below_lowest_threshold() {
    for raw in [3.5, 0.0, -2.0] {
        let levels = normalize(LanguageTest::Ielts, &RawScores::uniform(raw));
        assert_eq!(levels, ProficiencyProfile::uniform(MINIMUM_LEVEL));
    }

    let levels = normalize(LanguageTest::Tef, &RawScores::uniform(100.0));
    assert_eq!(levels, ProficiencyProfile::uniform(MINIMUM_LEVEL));
}

#[test]
fn nan_input_still_produces_a_level() {
    let level = LanguageTest::Tef.level_for(LanguageSkill::Reading, f64::NAN);
    assert_eq!(level, MINIMUM_LEVEL);
}

#[test]
fn tef_uses_independent_tables_per_skill() {
    let scores = RawScores {
        speaking: 350.0,
        listening: 300.0,
        reading: 233.0,
        writing: 226.0,
    };

    let levels = normalize(LanguageTest::Tef, &scores);

    assert_eq!(levels.speaking, 8);
    assert_eq!(levels.listening, 9);
    assert_eq!(levels.reading, 8);
    assert_eq!(levels.writing, 5);
}

#[test]
fn tef_threshold_is_inclusive() {
    assert_eq!(LanguageTest::Tef.level_for(LanguageSkill::Listening, 145.0), 4);
    assert_eq!(LanguageTest::Tef.level_for(LanguageSkill::Listening, 144.0), 3);
    assert_eq!(LanguageTest::Tef.level_for(LanguageSkill::Speaking, 393.0), 10);
}

#[test]
fn celpip_passes_scores_through_unclamped() {
    let scores = RawScores {
        speaking: 9.0,
        listening: 7.9,
        reading: 0.0,
        writing: 13.0,
    };

    let levels = normalize(LanguageTest::Celpip, &scores);

    assert_eq!(levels.speaking, 9);
    assert_eq!(levels.listening, 7);
    assert_eq!(levels.reading, 0);
    assert_eq!(levels.writing, 13);
}
