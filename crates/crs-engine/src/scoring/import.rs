//! Batch scoring of candidates exported as CSV, one candidate per row.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::ParseChoiceError;
use super::intake::{CandidateSubmission, IntakeError, LanguageResult};
use super::language::RawScores;
use super::service::CrsScoringService;
use super::ScoreBreakdown;

/// Failures while reading or scoring a candidate batch. Rows are numbered from 1,
/// not counting the header.
#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read candidate batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {field}: {message}")]
    InvalidField {
        row: usize,
        field: &'static str,
        message: String,
    },
    #[error("row {row}: {source}")]
    Rejected { row: usize, source: IntakeError },
}

/// One scored row of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate_id: String,
    pub breakdown: ScoreBreakdown,
}

pub struct CandidateBatchImporter;

impl CandidateBatchImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        service: &CrsScoringService,
    ) -> Result<Vec<ScoredCandidate>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, service)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        service: &CrsScoringService,
    ) -> Result<Vec<ScoredCandidate>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut scored = Vec::new();

        for (index, record) in csv_reader.deserialize::<CandidateRow>().enumerate() {
            let row = index + 1;
            let candidate = record?;
            let candidate_id = candidate.candidate_id.clone();
            let submission = candidate.into_submission(row)?;
            let result = service
                .score_submission(submission)
                .map_err(|source| BatchImportError::Rejected { row, source })?;

            scored.push(ScoredCandidate {
                candidate_id,
                breakdown: result.breakdown,
            });
        }

        debug!(candidates = scored.len(), "scored candidate batch");
        Ok(scored)
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    candidate_id: String,
    age: u32,
    education: String,
    #[serde(default)]
    marital_status: String,
    first_test: String,
    first_speaking: f64,
    first_listening: f64,
    first_reading: f64,
    first_writing: f64,
    #[serde(default)]
    second_test: Option<String>,
    #[serde(default)]
    second_speaking: Option<f64>,
    #[serde(default)]
    second_listening: Option<f64>,
    #[serde(default)]
    second_reading: Option<f64>,
    #[serde(default)]
    second_writing: Option<f64>,
    #[serde(default)]
    canadian_experience: String,
    #[serde(default)]
    foreign_experience: String,
    #[serde(default)]
    provincial_nomination: String,
    #[serde(default)]
    arranged_employment: String,
    #[serde(default)]
    certificate_of_qualification: String,
    #[serde(default)]
    canadian_family: String,
    #[serde(default)]
    canadian_education: String,
}

impl CandidateRow {
    fn into_submission(self, row: usize) -> Result<CandidateSubmission, BatchImportError> {
        let first_language = LanguageResult {
            test: choice(row, "first_test", &self.first_test)?,
            scores: RawScores {
                speaking: self.first_speaking,
                listening: self.first_listening,
                reading: self.first_reading,
                writing: self.first_writing,
            },
        };

        let second_language = match self.second_test.as_deref() {
            None => None,
            Some(test) => {
                let scores = match (
                    self.second_speaking,
                    self.second_listening,
                    self.second_reading,
                    self.second_writing,
                ) {
                    (Some(speaking), Some(listening), Some(reading), Some(writing)) => RawScores {
                        speaking,
                        listening,
                        reading,
                        writing,
                    },
                    _ => {
                        return Err(BatchImportError::InvalidField {
                            row,
                            field: "second_language",
                            message: "all four second-language scores are required".to_string(),
                        })
                    }
                };
                Some(LanguageResult {
                    test: choice(row, "second_test", test)?,
                    scores,
                })
            }
        };

        Ok(CandidateSubmission {
            age: self.age,
            education: choice(row, "education", &self.education)?,
            marital_status: choice(row, "marital_status", &self.marital_status)?,
            first_language,
            second_language,
            canadian_experience: choice(row, "canadian_experience", &self.canadian_experience)?,
            foreign_experience: choice(row, "foreign_experience", &self.foreign_experience)?,
            certificate_of_qualification: flag(
                row,
                "certificate_of_qualification",
                &self.certificate_of_qualification,
            )?,
            arranged_employment: flag(row, "arranged_employment", &self.arranged_employment)?,
            provincial_nomination: flag(row, "provincial_nomination", &self.provincial_nomination)?,
            canadian_education: choice(row, "canadian_education", &self.canadian_education)?,
            canadian_family: flag(row, "canadian_family", &self.canadian_family)?,
        })
    }
}

fn choice<T>(row: usize, field: &'static str, value: &str) -> Result<T, BatchImportError>
where
    T: std::str::FromStr<Err = ParseChoiceError>,
{
    value
        .parse()
        .map_err(|error: ParseChoiceError| BatchImportError::InvalidField {
            row,
            field,
            message: error.to_string(),
        })
}

fn flag(row: usize, field: &'static str, value: &str) -> Result<bool, BatchImportError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "no" | "n" | "false" | "0" => Ok(false),
        "yes" | "y" | "true" | "1" => Ok(true),
        other => Err(BatchImportError::InvalidField {
            row,
            field,
            message: format!("expected yes/no, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_yes_no_and_blank() {
        assert!(flag(1, "canadian_family", "Yes").expect("yes parses"));
        assert!(!flag(1, "canadian_family", "").expect("blank parses"));
        assert!(!flag(1, "canadian_family", "false").expect("false parses"));
        assert!(matches!(
            flag(3, "canadian_family", "maybe"),
            Err(BatchImportError::InvalidField { row: 3, .. })
        ));
    }
}
