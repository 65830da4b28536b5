//! Conversion of raw language-test results onto the standard proficiency scale.
//!
//! Banded tests resolve each skill by walking a descending table of minimum raw scores;
//! the first band the score reaches wins and anything below the last band floors at
//! [`MINIMUM_LEVEL`]. The 12-point test already reports on the standard scale and is
//! passed through untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{LanguageSkill, ParseChoiceError, ProficiencyProfile, MINIMUM_LEVEL};

/// Supported language tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTest {
    /// 0.0-9.0 band scale.
    #[serde(alias = "IELTS")]
    Ielts,
    /// 1-12 scale that already matches the standard levels.
    #[serde(alias = "CELPIP")]
    Celpip,
    /// Per-skill numeric ranges (0-450 / 0-360 / 0-300 / 0-450).
    #[serde(alias = "TEF")]
    Tef,
}

#[derive(Debug, Clone, Copy)]
struct Band {
    minimum: f64,
    level: i32,
}

const fn band(minimum: f64, level: i32) -> Band {
    Band { minimum, level }
}

const IELTS_BANDS: [Band; 8] = [
    band(9.0, 10),
    band(8.5, 9),
    band(7.0, 8),
    band(6.5, 7),
    band(6.0, 6),
    band(5.5, 5),
    band(5.0, 4),
    band(4.0, 3),
];

const TEF_SPEAKING_BANDS: [Band; 7] = [
    band(393.0, 10),
    band(371.0, 9),
    band(349.0, 8),
    band(310.0, 7),
    band(271.0, 6),
    band(226.0, 5),
    band(181.0, 4),
];

const TEF_LISTENING_BANDS: [Band; 7] = [
    band(316.0, 10),
    band(298.0, 9),
    band(280.0, 8),
    band(249.0, 7),
    band(217.0, 6),
    band(181.0, 5),
    band(145.0, 4),
];

const TEF_READING_BANDS: [Band; 7] = [
    band(263.0, 10),
    band(248.0, 9),
    band(233.0, 8),
    band(207.0, 7),
    band(181.0, 6),
    band(151.0, 5),
    band(121.0, 4),
];

// Writing shares the speaking cut-offs.
const TEF_WRITING_BANDS: [Band; 7] = TEF_SPEAKING_BANDS;

impl LanguageTest {
    pub const ALL: [LanguageTest; 3] = [LanguageTest::Ielts, LanguageTest::Celpip, LanguageTest::Tef];

    pub const fn label(self) -> &'static str {
        match self {
            LanguageTest::Ielts => "IELTS",
            LanguageTest::Celpip => "CELPIP",
            LanguageTest::Tef => "TEF",
        }
    }

    /// Inclusive raw-score range the test reports for a skill.
    pub const fn native_range(self, skill: LanguageSkill) -> (f64, f64) {
        match (self, skill) {
            (LanguageTest::Ielts, _) => (0.0, 9.0),
            (LanguageTest::Celpip, _) => (1.0, 12.0),
            (LanguageTest::Tef, LanguageSkill::Speaking | LanguageSkill::Writing) => (0.0, 450.0),
            (LanguageTest::Tef, LanguageSkill::Listening) => (0.0, 360.0),
            (LanguageTest::Tef, LanguageSkill::Reading) => (0.0, 300.0),
        }
    }

    fn bands(self, skill: LanguageSkill) -> Option<&'static [Band]> {
        match (self, skill) {
            (LanguageTest::Ielts, _) => Some(&IELTS_BANDS),
            (LanguageTest::Celpip, _) => None,
            (LanguageTest::Tef, LanguageSkill::Speaking) => Some(&TEF_SPEAKING_BANDS),
            (LanguageTest::Tef, LanguageSkill::Listening) => Some(&TEF_LISTENING_BANDS),
            (LanguageTest::Tef, LanguageSkill::Reading) => Some(&TEF_READING_BANDS),
            (LanguageTest::Tef, LanguageSkill::Writing) => Some(&TEF_WRITING_BANDS),
        }
    }

    /// Standard level for one skill's raw score.
    pub fn level_for(self, skill: LanguageSkill, raw: f64) -> i32 {
        match self.bands(skill) {
            Some(bands) => bands
                .iter()
                .find(|band| raw >= band.minimum)
                .map(|band| band.level)
                .unwrap_or(MINIMUM_LEVEL),
            // No clamp: out-of-range CELPIP values pass through as-is.
            None => raw.trunc() as i32,
        }
    }

    pub fn normalize(self, scores: &RawScores) -> ProficiencyProfile {
        ProficiencyProfile {
            speaking: self.level_for(LanguageSkill::Speaking, scores.speaking),
            listening: self.level_for(LanguageSkill::Listening, scores.listening),
            reading: self.level_for(LanguageSkill::Reading, scores.reading),
            writing: self.level_for(LanguageSkill::Writing, scores.writing),
        }
    }
}

impl fmt::Display for LanguageTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LanguageTest {
    type Err = ParseChoiceError;

    /// Accepts the test name in any case or its 1-3 menu number.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        match key.to_ascii_lowercase().as_str() {
            "1" | "ielts" => Ok(LanguageTest::Ielts),
            "2" | "celpip" => Ok(LanguageTest::Celpip),
            "3" | "tef" => Ok(LanguageTest::Tef),
            _ => Err(ParseChoiceError::new("language test", key)),
        }
    }
}

/// Raw per-skill results on a test's native scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub speaking: f64,
    pub listening: f64,
    pub reading: f64,
    pub writing: f64,
}

impl RawScores {
    pub const fn uniform(score: f64) -> Self {
        Self {
            speaking: score,
            listening: score,
            reading: score,
            writing: score,
        }
    }

    pub const fn get(&self, skill: LanguageSkill) -> f64 {
        match skill {
            LanguageSkill::Speaking => self.speaking,
            LanguageSkill::Listening => self.listening,
            LanguageSkill::Reading => self.reading,
            LanguageSkill::Writing => self.writing,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LanguageSkill, f64)> + '_ {
        LanguageSkill::ALL
            .into_iter()
            .map(move |skill| (skill, self.get(skill)))
    }
}

/// Error returned when a `speaking,listening,reading,writing` list cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected four comma-separated scores (speaking,listening,reading,writing), got '{0}'")]
pub struct ParseScoresError(pub String);

impl FromStr for RawScores {
    type Err = ParseScoresError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let values = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseScoresError(raw.to_string()))?;

        match values.as_slice() {
            [speaking, listening, reading, writing] => Ok(Self {
                speaking: *speaking,
                listening: *listening,
                reading: *reading,
                writing: *writing,
            }),
            _ => Err(ParseScoresError(raw.to_string())),
        }
    }
}

/// Normalize one test's raw scores onto the standard proficiency scale.
///
/// Total for every non-NaN input; callers validate numeric input first.
pub fn normalize(test: LanguageTest, scores: &RawScores) -> ProficiencyProfile {
    test.normalize(scores)
}
