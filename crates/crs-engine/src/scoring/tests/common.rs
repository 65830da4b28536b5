use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{
    CandidateProfile, CanadianEducation, EducationLevel, ExperienceBucket, MaritalStatus,
};
use crate::scoring::intake::{CandidateSubmission, LanguageResult};
use crate::scoring::language::{LanguageTest, RawScores};
use crate::scoring::{scoring_router, CrsEngine, CrsScoringService, ScoringConfig};

pub(super) fn ielts(score: f64) -> LanguageResult {
    LanguageResult {
        test: LanguageTest::Ielts,
        scores: RawScores::uniform(score),
    }
}

/// 28 years old, bachelor's, IELTS 7.0 across the board, three years in Canada.
pub(super) fn submission() -> CandidateSubmission {
    CandidateSubmission {
        age: 28,
        education: EducationLevel::Bachelors,
        marital_status: MaritalStatus::Single,
        first_language: ielts(7.0),
        second_language: None,
        canadian_experience: ExperienceBucket::Years(3),
        foreign_experience: ExperienceBucket::Years(0),
        certificate_of_qualification: false,
        arranged_employment: false,
        provincial_nomination: false,
        canadian_education: CanadianEducation::NoCredential,
        canadian_family: false,
    }
}

pub(super) fn profile() -> CandidateProfile {
    let submission = submission();
    CandidateProfile {
        age: submission.age,
        education: submission.education,
        first_language: LanguageTest::Ielts.normalize(&submission.first_language.scores),
        canadian_experience: submission.canadian_experience,
        ..CandidateProfile::default()
    }
}

pub(super) fn engine() -> CrsEngine {
    CrsEngine::new(ScoringConfig::default())
}

pub(super) fn service() -> CrsScoringService {
    CrsScoringService::new(ScoringConfig::default())
}

pub(super) fn router() -> axum::Router {
    scoring_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
