use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lowest proficiency level any banded test produces.
pub const MINIMUM_LEVEL: i32 = 3;

/// The four assessed language skills, in the order tests report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSkill {
    Speaking,
    Listening,
    Reading,
    Writing,
}

impl LanguageSkill {
    pub const ALL: [LanguageSkill; 4] = [
        LanguageSkill::Speaking,
        LanguageSkill::Listening,
        LanguageSkill::Reading,
        LanguageSkill::Writing,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            LanguageSkill::Speaking => "speaking",
            LanguageSkill::Listening => "listening",
            LanguageSkill::Reading => "reading",
            LanguageSkill::Writing => "writing",
        }
    }
}

impl fmt::Display for LanguageSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Standard proficiency levels, one per skill, produced by normalizing a test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyProfile {
    pub speaking: i32,
    pub listening: i32,
    pub reading: i32,
    pub writing: i32,
}

impl ProficiencyProfile {
    pub const fn uniform(level: i32) -> Self {
        Self {
            speaking: level,
            listening: level,
            reading: level,
            writing: level,
        }
    }

    pub const fn level(&self, skill: LanguageSkill) -> i32 {
        match skill {
            LanguageSkill::Speaking => self.speaking,
            LanguageSkill::Listening => self.listening,
            LanguageSkill::Reading => self.reading,
            LanguageSkill::Writing => self.writing,
        }
    }

    pub fn levels(&self) -> impl Iterator<Item = (LanguageSkill, i32)> + '_ {
        LanguageSkill::ALL
            .into_iter()
            .map(move |skill| (skill, self.level(skill)))
    }
}

impl Default for ProficiencyProfile {
    fn default() -> Self {
        Self::uniform(MINIMUM_LEVEL)
    }
}

/// Highest completed education, ordered from lowest to highest tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    #[serde(alias = "none")]
    BelowSecondary,
    #[serde(alias = "highSchool", alias = "high_school")]
    Secondary,
    #[serde(alias = "oneYear", alias = "oneyearDegree")]
    OneYearProgram,
    #[serde(alias = "twoYear", alias = "twoyearDegree")]
    TwoYearProgram,
    #[serde(alias = "threeyearDegree")]
    Bachelors,
    #[serde(alias = "twoOrMore", alias = "twoOrMoreDegrees")]
    TwoOrMoreCredentials,
    Masters,
    #[serde(alias = "phd")]
    Doctoral,
    /// Any tier the tables do not know; scores zero.
    #[serde(other)]
    Unrecognized,
}

impl EducationLevel {
    pub const TIERS: [EducationLevel; 8] = [
        EducationLevel::BelowSecondary,
        EducationLevel::Secondary,
        EducationLevel::OneYearProgram,
        EducationLevel::TwoYearProgram,
        EducationLevel::Bachelors,
        EducationLevel::TwoOrMoreCredentials,
        EducationLevel::Masters,
        EducationLevel::Doctoral,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::BelowSecondary => "Less than secondary school",
            EducationLevel::Secondary => "Secondary diploma",
            EducationLevel::OneYearProgram => "One-year program",
            EducationLevel::TwoYearProgram => "Two-year program",
            EducationLevel::Bachelors => "Bachelor's degree",
            EducationLevel::TwoOrMoreCredentials => "Two or more credentials (one 3+ years)",
            EducationLevel::Masters => "Master's degree",
            EducationLevel::Doctoral => "Doctoral degree",
            EducationLevel::Unrecognized => "Unrecognized education",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = ParseChoiceError;

    /// Accepts the snake_case key, the form keys, or the 1-8 menu number.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        let level = match key.to_ascii_lowercase().as_str() {
            "1" | "none" | "below_secondary" => EducationLevel::BelowSecondary,
            "2" | "secondary" | "highschool" | "high_school" => EducationLevel::Secondary,
            "3" | "one_year_program" | "oneyear" | "oneyeardegree" => {
                EducationLevel::OneYearProgram
            }
            "4" | "two_year_program" | "twoyear" | "twoyeardegree" => {
                EducationLevel::TwoYearProgram
            }
            "5" | "bachelors" | "threeyeardegree" => EducationLevel::Bachelors,
            "6" | "two_or_more_credentials" | "twoormore" | "twoormoredegrees" => {
                EducationLevel::TwoOrMoreCredentials
            }
            "7" | "masters" => EducationLevel::Masters,
            "8" | "doctoral" | "phd" => EducationLevel::Doctoral,
            _ => return Err(ParseChoiceError::new("education", key)),
        };
        Ok(level)
    }
}

/// Canadian study credential tier used by the additional-factor bonuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanadianEducation {
    #[default]
    #[serde(alias = "no", alias = "none")]
    NoCredential,
    Secondary,
    #[serde(alias = "oneOrTwo")]
    OneOrTwoYear,
    #[serde(alias = "threeOrMore")]
    ThreeOrMoreYear,
    #[serde(other)]
    Unrecognized,
}

impl FromStr for CanadianEducation {
    type Err = ParseChoiceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        let tier = match key.to_ascii_lowercase().as_str() {
            "" | "1" | "no" | "none" => CanadianEducation::NoCredential,
            "2" | "secondary" => CanadianEducation::Secondary,
            "3" | "one_or_two_year" | "oneortwo" => CanadianEducation::OneOrTwoYear,
            "4" | "three_or_more_year" | "threeormore" => CanadianEducation::ThreeOrMoreYear,
            _ => return Err(ParseChoiceError::new("canadian education", key)),
        };
        Ok(tier)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Single,
    #[serde(alias = "common_law")]
    Married,
}

impl FromStr for MaritalStatus {
    type Err = ParseChoiceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        match key.to_ascii_lowercase().as_str() {
            "" | "single" => Ok(MaritalStatus::Single),
            "married" | "common_law" | "common-law" => Ok(MaritalStatus::Married),
            _ => Err(ParseChoiceError::new("marital status", key)),
        }
    }
}

/// Year-count bucket for work experience: an exact count (`3`) or an open-ended one (`5+`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceBucket {
    Years(u8),
    AtLeast(u8),
}

impl Default for ExperienceBucket {
    fn default() -> Self {
        ExperienceBucket::Years(0)
    }
}

impl fmt::Display for ExperienceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceBucket::Years(years) => write!(f, "{years}"),
            ExperienceBucket::AtLeast(years) => write!(f, "{years}+"),
        }
    }
}

impl FromStr for ExperienceBucket {
    type Err = ParseChoiceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        if key.is_empty() {
            return Ok(ExperienceBucket::default());
        }

        let (digits, open_ended) = match key.strip_suffix('+') {
            Some(prefix) => (prefix.trim(), true),
            None => (key, false),
        };

        let years = digits
            .parse::<u8>()
            .map_err(|_| ParseChoiceError::new("experience", key))?;

        Ok(if open_ended {
            ExperienceBucket::AtLeast(years)
        } else {
            ExperienceBucket::Years(years)
        })
    }
}

impl Serialize for ExperienceBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExperienceBucket::Years(years) => serializer.serialize_u8(*years),
            ExperienceBucket::AtLeast(_) => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for ExperienceBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawBucket {
            Count(u64),
            Text(String),
        }

        match RawBucket::deserialize(deserializer)? {
            RawBucket::Count(years) => u8::try_from(years)
                .map(ExperienceBucket::Years)
                .map_err(|_| serde::de::Error::custom(format!("{years} years is out of range"))),
            RawBucket::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Complete, normalized input to the aggregator.
///
/// Every field has a default so a partially populated record still scores; absent
/// categories contribute their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub age: u32,
    pub education: EducationLevel,
    pub marital_status: MaritalStatus,
    pub first_language: ProficiencyProfile,
    pub second_language: Option<ProficiencyProfile>,
    pub canadian_experience: ExperienceBucket,
    pub foreign_experience: ExperienceBucket,
    pub certificate_of_qualification: bool,
    pub arranged_employment: bool,
    pub provincial_nomination: bool,
    pub canadian_education: CanadianEducation,
    pub canadian_family: bool,
}

/// A categorical answer that matched none of the known choices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {field} choice '{value}'")]
pub struct ParseChoiceError {
    pub field: &'static str,
    pub value: String,
}

impl ParseChoiceError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_bucket_parses_exact_and_open_ended_counts() {
        assert_eq!("3".parse::<ExperienceBucket>(), Ok(ExperienceBucket::Years(3)));
        assert_eq!(" 5+ ".parse::<ExperienceBucket>(), Ok(ExperienceBucket::AtLeast(5)));
        assert_eq!("".parse::<ExperienceBucket>(), Ok(ExperienceBucket::Years(0)));
        assert!("five".parse::<ExperienceBucket>().is_err());
    }

    #[test]
    fn experience_bucket_accepts_numbers_and_strings_from_json() {
        let exact: ExperienceBucket = serde_json::from_str("4").expect("number bucket");
        let open: ExperienceBucket = serde_json::from_str("\"5+\"").expect("string bucket");
        let quoted: ExperienceBucket = serde_json::from_str("\"2\"").expect("quoted bucket");

        assert_eq!(exact, ExperienceBucket::Years(4));
        assert_eq!(open, ExperienceBucket::AtLeast(5));
        assert_eq!(quoted, ExperienceBucket::Years(2));
        assert_eq!(serde_json::to_string(&open).expect("serializes"), "\"5+\"");
    }

    #[test]
    fn education_accepts_form_keys_and_menu_numbers() {
        assert_eq!("phd".parse::<EducationLevel>(), Ok(EducationLevel::Doctoral));
        assert_eq!("highSchool".parse::<EducationLevel>(), Ok(EducationLevel::Secondary));
        assert_eq!("5".parse::<EducationLevel>(), Ok(EducationLevel::Bachelors));
        assert!("9".parse::<EducationLevel>().is_err());

        let from_json: EducationLevel =
            serde_json::from_str("\"oneyearDegree\"").expect("alias parses");
        assert_eq!(from_json, EducationLevel::OneYearProgram);
        let unknown: EducationLevel =
            serde_json::from_str("\"apprenticeship\"").expect("unknown tier tolerated");
        assert_eq!(unknown, EducationLevel::Unrecognized);
    }

    #[test]
    fn missing_profile_fields_take_defaults() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{ "age": 28 }"#).expect("partial profile parses");

        assert_eq!(profile.age, 28);
        assert_eq!(profile.education, EducationLevel::BelowSecondary);
        assert_eq!(profile.first_language, ProficiencyProfile::uniform(MINIMUM_LEVEL));
        assert!(profile.second_language.is_none());
        assert_eq!(profile.canadian_experience, ExperienceBucket::Years(0));
    }
}
