use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::domain::{CandidateProfile, ProficiencyProfile};
use super::intake::{check_finite, CandidateSubmission, IntakeError, IntakeGuard};
use super::language::{LanguageTest, RawScores};
use super::{CrsEngine, ScoreBreakdown};

/// Normalized profile returned alongside its breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSubmission {
    pub profile: CandidateProfile,
    pub breakdown: ScoreBreakdown,
}

/// Service composing the intake guard and the scoring engine.
#[derive(Debug, Clone, Default)]
pub struct CrsScoringService {
    guard: IntakeGuard,
    engine: CrsEngine,
}

impl CrsScoringService {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), config)
    }

    pub fn with_guard(guard: IntakeGuard, config: ScoringConfig) -> Self {
        Self {
            guard,
            engine: CrsEngine::new(config),
        }
    }

    /// Validate and normalize a raw submission, then score it.
    pub fn score_submission(
        &self,
        submission: CandidateSubmission,
    ) -> Result<ScoredSubmission, IntakeError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let breakdown = self.engine.compute_score(&profile);
        Ok(ScoredSubmission { profile, breakdown })
    }

    /// Score an already-normalized profile. Never fails.
    pub fn score_profile(&self, profile: &CandidateProfile) -> ScoreBreakdown {
        self.engine.compute_score(profile)
    }

    /// Normalize a single test result. Only non-finite input is rejected; range
    /// handling is left to the normalizer's floor behavior.
    pub fn normalize(
        &self,
        test: LanguageTest,
        scores: &RawScores,
    ) -> Result<ProficiencyProfile, IntakeError> {
        check_finite("requested", scores)?;
        Ok(test.normalize(scores))
    }
}
