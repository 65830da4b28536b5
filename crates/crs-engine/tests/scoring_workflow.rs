//! Integration specifications for candidate intake, scoring, and batch import.
//!
//! Scenarios exercise the public service facade, the HTTP router, and the CSV importer
//! without reaching into private modules.

mod common {
    use std::sync::Arc;

    use crs_engine::scoring::{
        scoring_router, CandidateSubmission, CanadianEducation, CrsScoringService,
        EducationLevel, ExperienceBucket, LanguageResult, LanguageTest, MaritalStatus,
        RawScores, ScoringConfig,
    };

    pub(super) const HEADER: &str = "candidate_id,age,education,marital_status,first_test,\
first_speaking,first_listening,first_reading,first_writing,second_test,second_speaking,\
second_listening,second_reading,second_writing,canadian_experience,foreign_experience,\
provincial_nomination,arranged_employment,certificate_of_qualification,canadian_family,\
canadian_education";

    pub(super) fn submission() -> CandidateSubmission {
        CandidateSubmission {
            age: 28,
            education: EducationLevel::Bachelors,
            marital_status: MaritalStatus::Single,
            first_language: LanguageResult {
                test: LanguageTest::Ielts,
                scores: RawScores::uniform(7.0),
            },
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

    pub(super) fn service() -> CrsScoringService {
        CrsScoringService::new(ScoringConfig::default())
    }

    pub(super) fn router() -> axum::Router {
        scoring_router(Arc::new(service()))
    }

    pub(super) fn batch(rows: &[&str]) -> String {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv
    }
}

use axum::http::{header, Request, StatusCode};
use common::*;
use crs_engine::scoring::{
    normalize, BatchImportError, CandidateBatchImporter, CrsScoringService, IntakeError,
    LanguageTest, ProficiencyProfile, RawScores, ScoreCategory, ScoringConfig,
    SecondLanguageSchedule,
};
use tower::ServiceExt;

#[test]
fn nomination_lifts_reference_candidate_by_six_hundred() {
    let service = service();
    let baseline = service
        .score_submission(submission())
        .expect("baseline scores");

    let mut nominated = submission();
    nominated.provincial_nomination = true;
    let boosted = service.score_submission(nominated).expect("nominated scores");

    assert_eq!(baseline.breakdown.total, 382);
    assert_eq!(boosted.breakdown.total, 982);
    assert_eq!(
        boosted.breakdown.points(ScoreCategory::AdditionalFactors),
        600
    );
}

#[test]
fn normalizer_floors_low_scores_and_passes_celpip_through() {
    assert_eq!(
        normalize(LanguageTest::Ielts, &RawScores::uniform(3.5)),
        ProficiencyProfile::uniform(3)
    );
    assert_eq!(
        normalize(LanguageTest::Celpip, &RawScores::uniform(11.0)),
        ProficiencyProfile::uniform(11)
    );
}

#[test]
fn conversational_schedule_changes_only_second_language_points() {
    let mut submission = submission();
    submission.second_language = Some(crs_engine::scoring::LanguageResult {
        test: LanguageTest::Celpip,
        scores: RawScores::uniform(8.0),
    });

    let calculator = service()
        .score_submission(submission.clone())
        .expect("calculator schedule");
    let conversational = CrsScoringService::new(ScoringConfig {
        second_language_schedule: SecondLanguageSchedule::Conversational,
    })
    .score_submission(submission)
    .expect("conversational schedule");

    assert_eq!(
        calculator
            .breakdown
            .points(ScoreCategory::SecondOfficialLanguage),
        16
    );
    assert_eq!(
        conversational
            .breakdown
            .points(ScoreCategory::SecondOfficialLanguage),
        24
    );
    assert_eq!(
        conversational.breakdown.total - calculator.breakdown.total,
        8
    );
}

#[test]
fn batch_import_scores_each_row() {
    let csv = batch(&[
        "cand-1,28,bachelors,single,ielts,7,7,7,7,,,,,,3,0,no,no,no,no,",
        "cand-2,35,masters,married,celpip,9,9,9,9,,,,,,5+,3+,yes,,,,none",
    ]);

    let scored = CandidateBatchImporter::from_reader(csv.as_bytes(), &service())
        .expect("batch imports");

    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].candidate_id, "cand-1");
    assert_eq!(scored[0].breakdown.total, 382);
    assert_eq!(scored[1].breakdown.total, 77 + 135 + 116 + 80 + 25 + 600);
}

#[test]
fn batch_import_reads_second_language_columns() {
    let csv = batch(&["cand-3,28,bachelors,,ielts,7,7,7,7,tef,230,190,160,230,3,0,,,,,"]);

    let scored = CandidateBatchImporter::from_reader(csv.as_bytes(), &service())
        .expect("batch imports");

    assert_eq!(
        scored[0]
            .breakdown
            .points(ScoreCategory::SecondOfficialLanguage),
        16
    );
}

#[test]
fn batch_import_reports_offending_row() {
    let csv = batch(&[
        "cand-1,28,bachelors,single,ielts,7,7,7,7,,,,,,3,0,no,no,no,no,",
        "cand-2,28,apprenticeship,single,ielts,7,7,7,7,,,,,,3,0,no,no,no,no,",
    ]);
    let err = CandidateBatchImporter::from_reader(csv.as_bytes(), &service())
        .expect_err("unknown education");
    assert!(matches!(
        err,
        BatchImportError::InvalidField {
            row: 2,
            field: "education",
            ..
        }
    ));

    let csv = batch(&["cand-9,15,bachelors,single,ielts,7,7,7,7,,,,,,3,0,no,no,no,no,"]);
    let err = CandidateBatchImporter::from_reader(csv.as_bytes(), &service())
        .expect_err("too young");
    assert!(matches!(
        err,
        BatchImportError::Rejected {
            row: 1,
            source: IntakeError::AgeOutOfRange { age: 15, .. }
        }
    ));
}

#[tokio::test]
async fn router_rejects_out_of_range_scores() {
    let mut submission = submission();
    submission.first_language.scores.speaking = 9.5;

    let response = router()
        .oneshot(
            Request::post("/api/v1/crs/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission).expect("serialize submission"),
                ))
                .expect("request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
