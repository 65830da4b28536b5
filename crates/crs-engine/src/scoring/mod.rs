//! Comprehensive Ranking System scoring: language normalization, per-category point
//! tables, and the aggregator that sums them into a breakdown.

mod config;
pub mod domain;
pub mod import;
mod intake;
pub mod language;
mod router;
mod rules;
mod service;
pub mod tables;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use config::{ScoringConfig, SecondLanguageSchedule};
pub use domain::{
    CandidateProfile, CanadianEducation, EducationLevel, ExperienceBucket, LanguageSkill,
    MaritalStatus, ParseChoiceError, ProficiencyProfile, MINIMUM_LEVEL,
};
pub use import::{BatchImportError, CandidateBatchImporter, ScoredCandidate};
pub use intake::{CandidateSubmission, IntakeError, IntakeGuard, IntakePolicy, LanguageResult};
pub use language::{normalize, LanguageTest, ParseScoresError, RawScores};
pub use router::scoring_router;
pub use service::{CrsScoringService, ScoredSubmission};

/// Stateless aggregator applying the fixed tables to a candidate snapshot.
#[derive(Debug, Clone, Default)]
pub struct CrsEngine {
    config: ScoringConfig,
}

impl CrsEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score every category and sum the results. No overall cap is applied.
    pub fn compute_score(&self, profile: &CandidateProfile) -> ScoreBreakdown {
        let components = rules::score_categories(profile, &self.config);
        let breakdown = ScoreBreakdown::from_components(components);

        debug!(
            total = breakdown.total,
            categories = breakdown.components.len(),
            "computed CRS breakdown"
        );

        breakdown
    }
}

/// Score a profile with the default engine policy.
pub fn compute_score(profile: &CandidateProfile) -> ScoreBreakdown {
    CrsEngine::default().compute_score(profile)
}

/// Independently scored dimension of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Age,
    Education,
    FirstOfficialLanguage,
    SecondOfficialLanguage,
    CanadianWorkExperience,
    ForeignWorkExperience,
    AdditionalFactors,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 7] = [
        ScoreCategory::Age,
        ScoreCategory::Education,
        ScoreCategory::FirstOfficialLanguage,
        ScoreCategory::SecondOfficialLanguage,
        ScoreCategory::CanadianWorkExperience,
        ScoreCategory::ForeignWorkExperience,
        ScoreCategory::AdditionalFactors,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Age => "Age",
            ScoreCategory::Education => "Education",
            ScoreCategory::FirstOfficialLanguage => "First official language",
            ScoreCategory::SecondOfficialLanguage => "Second official language",
            ScoreCategory::CanadianWorkExperience => "Canadian work experience",
            ScoreCategory::ForeignWorkExperience => "Foreign work experience",
            ScoreCategory::AdditionalFactors => "Additional factors",
        }
    }
}

/// Points contributed by one category, with a short audit note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub points: u32,
    pub notes: String,
}

/// Per-category contributions and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<CategoryScore>,
    pub total: u32,
}

impl ScoreBreakdown {
    fn from_components(components: Vec<CategoryScore>) -> Self {
        let total = components.iter().map(|component| component.points).sum();
        Self { components, total }
    }

    pub fn points(&self, category: ScoreCategory) -> u32 {
        self.components
            .iter()
            .filter(|component| component.category == category)
            .map(|component| component.points)
            .sum()
    }

    pub fn by_category(&self) -> BTreeMap<ScoreCategory, u32> {
        self.components
            .iter()
            .map(|component| (component.category, component.points))
            .collect()
    }
}
