use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which of the two fixed second-official-language tables applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondLanguageSchedule {
    /// Level 5+ earns 4 points per skill, level 4 earns 2.
    #[default]
    Calculator,
    /// Level 7+ earns 6 points per skill, levels 5-6 earn 3.
    Conversational,
}

impl SecondLanguageSchedule {
    pub const fn label(self) -> &'static str {
        match self {
            SecondLanguageSchedule::Calculator => "calculator",
            SecondLanguageSchedule::Conversational => "conversational",
        }
    }
}

impl fmt::Display for SecondLanguageSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SecondLanguageSchedule {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "calculator" | "form" => Ok(SecondLanguageSchedule::Calculator),
            "conversational" | "chat" => Ok(SecondLanguageSchedule::Conversational),
            other => Err(other.to_string()),
        }
    }
}

/// Engine policy. The point tables are fixed; only the table selection varies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub second_language_schedule: SecondLanguageSchedule,
}
