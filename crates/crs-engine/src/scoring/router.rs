use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::CandidateProfile;
use super::intake::{CandidateSubmission, IntakeError, LanguageResult};
use super::service::CrsScoringService;

/// Router builder exposing the scoring engine over HTTP.
pub fn scoring_router(service: Arc<CrsScoringService>) -> Router {
    Router::new()
        .route("/api/v1/crs/score", post(score_handler))
        .route("/api/v1/crs/profile/score", post(profile_score_handler))
        .route("/api/v1/crs/normalize", post(normalize_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<CrsScoringService>>,
    axum::Json(submission): axum::Json<CandidateSubmission>,
) -> Response {
    match service.score_submission(submission) {
        Ok(scored) => (StatusCode::OK, axum::Json(scored)).into_response(),
        Err(error) => rejected(error),
    }
}

pub(crate) async fn profile_score_handler(
    State(service): State<Arc<CrsScoringService>>,
    axum::Json(profile): axum::Json<CandidateProfile>,
) -> Response {
    let breakdown = service.score_profile(&profile);
    (StatusCode::OK, axum::Json(breakdown)).into_response()
}

pub(crate) async fn normalize_handler(
    State(service): State<Arc<CrsScoringService>>,
    axum::Json(request): axum::Json<LanguageResult>,
) -> Response {
    match service.normalize(request.test, &request.scores) {
        Ok(levels) => (StatusCode::OK, axum::Json(levels)).into_response(),
        Err(error) => rejected(error),
    }
}

fn rejected(error: IntakeError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
