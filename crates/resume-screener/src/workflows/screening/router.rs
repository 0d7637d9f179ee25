use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::task::JoinError;

use super::domain::Candidate;
use super::intake::{pasted_candidate, sample_candidates};
use super::report::export::run_report;
use super::service::{ScreeningError, ScreeningRequest, ScreeningRun, ScreeningService};

/// Request body shared by the run and report endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreeningRunRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub minimum_score: Option<i64>,
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
    #[serde(default)]
    pub use_samples: bool,
}

/// Candidate as posted by a client. Missing names and emails are filled in from the
/// candidate's position in the pool.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "resume")]
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequirementsRequest {
    #[serde(default)]
    pub(crate) job_description: String,
}

impl ScreeningRunRequest {
    fn into_screening_request(self) -> ScreeningRequest {
        let mut candidates: Vec<Candidate> = self
            .candidates
            .into_iter()
            .enumerate()
            .map(|(offset, input)| {
                let mut candidate = pasted_candidate(offset + 1, input.resume_text);
                if let Some(name) = input.name.filter(|name| !name.trim().is_empty()) {
                    candidate.name = name;
                }
                if let Some(email) = input.email.filter(|email| !email.trim().is_empty()) {
                    candidate.email = email;
                }
                candidate
            })
            .collect();

        if self.use_samples {
            candidates.extend(sample_candidates());
        }

        ScreeningRequest {
            job_description: self.job_description,
            position: self.position,
            minimum_score: self.minimum_score,
            candidates,
        }
    }
}

/// Router builder exposing requirement extraction and screening runs.
pub fn screening_router(service: Arc<ScreeningService>) -> Router {
    Router::new()
        .route(
            "/api/v1/screening/requirements",
            post(requirements_handler),
        )
        .route("/api/v1/screening/runs", post(run_handler))
        .route("/api/v1/screening/runs/report", post(report_handler))
        .with_state(service)
}

pub(crate) async fn requirements_handler(
    State(service): State<Arc<ScreeningService>>,
    axum::Json(request): axum::Json<RequirementsRequest>,
) -> Response {
    match service.requirements(&request.job_description) {
        Ok(requirements) => (StatusCode::OK, axum::Json(requirements)).into_response(),
        Err(error) => validation_failure(error),
    }
}

pub(crate) async fn run_handler(
    State(service): State<Arc<ScreeningService>>,
    axum::Json(request): axum::Json<ScreeningRunRequest>,
) -> Response {
    match screen_off_runtime(service, request).await {
        Ok(Ok(run)) => (StatusCode::OK, axum::Json(run)).into_response(),
        Ok(Err(error)) => validation_failure(error),
        Err(error) => scoring_failure(error),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<ScreeningService>>,
    axum::Json(request): axum::Json<ScreeningRunRequest>,
) -> Response {
    match screen_off_runtime(service, request).await {
        Ok(Ok(run)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            run_report(&run),
        )
            .into_response(),
        Ok(Err(error)) => validation_failure(error),
        Err(error) => scoring_failure(error),
    }
}

/// Batches may fan out over scoped threads, so scoring runs on the blocking pool.
async fn screen_off_runtime(
    service: Arc<ScreeningService>,
    request: ScreeningRunRequest,
) -> Result<Result<ScreeningRun, ScreeningError>, JoinError> {
    let request = request.into_screening_request();
    tokio::task::spawn_blocking(move || service.screen(request)).await
}

fn scoring_failure(error: JoinError) -> Response {
    tracing::error!(%error, "screening task failed");
    let payload = json!({
        "error": "screening failed",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

fn validation_failure(error: ScreeningError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
