use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{
    CandidateProfile, CanadianEducation, EducationLevel, ExperienceBucket, LanguageSkill,
    MaritalStatus, ProficiencyProfile,
};
use super::language::{LanguageTest, RawScores};

/// One language test result as entered by the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageResult {
    pub test: LanguageTest,
    pub scores: RawScores,
}

/// Raw record assembled by a collection surface before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub age: u32,
    pub education: EducationLevel,
    #[serde(default)]
    pub marital_status: MaritalStatus,
    pub first_language: LanguageResult,
    #[serde(default)]
    pub second_language: Option<LanguageResult>,
    #[serde(default)]
    pub canadian_experience: ExperienceBucket,
    #[serde(default)]
    pub foreign_experience: ExperienceBucket,
    #[serde(default)]
    pub certificate_of_qualification: bool,
    #[serde(default)]
    pub arranged_employment: bool,
    #[serde(default)]
    pub provincial_nomination: bool,
    #[serde(default)]
    pub canadian_education: CanadianEducation,
    #[serde(default)]
    pub canadian_family: bool,
}

/// Input validation failures raised before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("age {age} is outside the accepted range {minimum}-{maximum}")]
    AgeOutOfRange { age: u32, minimum: u32, maximum: u32 },
    #[error("education tier is not recognized")]
    UnrecognizedEducation,
    #[error("canadian education tier is not recognized")]
    UnrecognizedCanadianEducation,
    #[error("{language} language {skill} score must be a finite number")]
    NonFiniteScore {
        language: &'static str,
        skill: LanguageSkill,
    },
    #[error("{language} language {test} {skill} score {value} is outside {minimum}-{maximum}")]
    ScoreOutOfRange {
        language: &'static str,
        test: LanguageTest,
        skill: LanguageSkill,
        value: f64,
        minimum: f64,
        maximum: f64,
    },
    #[error("{kind} work experience bucket '{bucket}' is not one of {allowed}")]
    UndefinedExperienceBucket {
        kind: &'static str,
        bucket: ExperienceBucket,
        allowed: &'static str,
    },
}

const DEFAULT_MINIMUM_AGE: u32 = 17;
const DEFAULT_MAXIMUM_AGE: u32 = 99;

/// Bounds applied to free-form numeric answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePolicy {
    pub minimum_age: u32,
    pub maximum_age: u32,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            minimum_age: DEFAULT_MINIMUM_AGE,
            maximum_age: DEFAULT_MAXIMUM_AGE,
        }
    }
}

/// Guard responsible for producing `CandidateProfile` instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    /// Validate a submission, normalize its language results, and assemble the profile.
    pub fn profile_from_submission(
        &self,
        submission: CandidateSubmission,
    ) -> Result<CandidateProfile, IntakeError> {
        if let Err(error) = self.check(&submission) {
            warn!(%error, "rejected candidate submission");
            return Err(error);
        }

        Ok(CandidateProfile {
            age: submission.age,
            education: submission.education,
            marital_status: submission.marital_status,
            first_language: normalize_result(&submission.first_language),
            second_language: submission.second_language.as_ref().map(normalize_result),
            canadian_experience: submission.canadian_experience,
            foreign_experience: submission.foreign_experience,
            certificate_of_qualification: submission.certificate_of_qualification,
            arranged_employment: submission.arranged_employment,
            provincial_nomination: submission.provincial_nomination,
            canadian_education: submission.canadian_education,
            canadian_family: submission.canadian_family,
        })
    }

    fn check(&self, submission: &CandidateSubmission) -> Result<(), IntakeError> {
        let IntakePolicy {
            minimum_age,
            maximum_age,
        } = self.policy;
        if !(minimum_age..=maximum_age).contains(&submission.age) {
            return Err(IntakeError::AgeOutOfRange {
                age: submission.age,
                minimum: minimum_age,
                maximum: maximum_age,
            });
        }

        if submission.education == EducationLevel::Unrecognized {
            return Err(IntakeError::UnrecognizedEducation);
        }

        if submission.canadian_education == CanadianEducation::Unrecognized {
            return Err(IntakeError::UnrecognizedCanadianEducation);
        }

        check_language("first", &submission.first_language)?;
        if let Some(second) = &submission.second_language {
            check_language("second", second)?;
        }

        match submission.canadian_experience {
            ExperienceBucket::Years(0..=5) | ExperienceBucket::AtLeast(5) => {}
            bucket => {
                return Err(IntakeError::UndefinedExperienceBucket {
                    kind: "canadian",
                    bucket,
                    allowed: "0, 1, 2, 3, 4, 5 or 5+",
                })
            }
        }

        match submission.foreign_experience {
            ExperienceBucket::Years(0..=3) | ExperienceBucket::AtLeast(3) => {}
            bucket => {
                return Err(IntakeError::UndefinedExperienceBucket {
                    kind: "foreign",
                    bucket,
                    allowed: "0, 1, 2, 3 or 3+",
                })
            }
        }

        Ok(())
    }
}

pub(crate) fn check_finite(
    language: &'static str,
    scores: &RawScores,
) -> Result<(), IntakeError> {
    match scores.iter().find(|(_, value)| !value.is_finite()) {
        Some((skill, _)) => Err(IntakeError::NonFiniteScore { language, skill }),
        None => Ok(()),
    }
}

/// Reject non-finite or out-of-range raw scores for one test result.
fn check_language(
    language: &'static str,
    result: &LanguageResult,
) -> Result<(), IntakeError> {
    check_finite(language, &result.scores)?;

    for (skill, value) in result.scores.iter() {
        let (minimum, maximum) = result.test.native_range(skill);
        if value < minimum || value > maximum {
            return Err(IntakeError::ScoreOutOfRange {
                language,
                test: result.test,
                skill,
                value,
                minimum,
                maximum,
            });
        }
    }

    Ok(())
}

fn normalize_result(result: &LanguageResult) -> ProficiencyProfile {
    result.test.normalize(&result.scores)
}
