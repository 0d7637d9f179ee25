use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::screening::domain::{Candidate, RequirementSet, SkillVocabulary};
use crate::workflows::screening::requirements::RequirementExtractor;
use crate::workflows::screening::{
    screening_router, ScreeningConfig, ScreeningRequest, ScreeningService,
};

pub(super) const SENIOR_JOB: &str =
    "Senior Developer with 5+ years, React, Node.js, AWS required";

pub(super) fn web_vocabulary() -> SkillVocabulary {
    SkillVocabulary::new(["React", "Node.js", "AWS"])
}

pub(super) fn senior_requirements() -> RequirementSet {
    RequirementExtractor::new(web_vocabulary()).extract(SENIOR_JOB)
}

pub(super) fn strong_candidate() -> Candidate {
    Candidate::new(
        "Priya Natarajan",
        "priya@example.com",
        "6 years experience. React, Node.js, AWS, Python. Led the backend team.",
    )
}

pub(super) fn junior_candidate() -> Candidate {
    Candidate::new(
        "Tom Becker",
        "tom@example.com",
        "Recent graduate. Built a React portfolio site.",
    )
}

pub(super) fn mid_candidate() -> Candidate {
    Candidate::new(
        "Lena Park",
        "lena@example.com",
        "3 years with Node.js and React. Bachelor's degree in Physics.",
    )
}

/// Three distinct candidates plus a copy of the strongest one under another name.
pub(super) fn mixed_pool() -> Vec<Candidate> {
    let mut twin = strong_candidate();
    twin.name = "Priya Twin".to_string();
    twin.email = "twin@example.com".to_string();
    vec![
        junior_candidate(),
        strong_candidate(),
        mid_candidate(),
        twin,
    ]
}

pub(super) fn web_config() -> ScreeningConfig {
    ScreeningConfig {
        vocabulary: web_vocabulary(),
        ..ScreeningConfig::default()
    }
}

pub(super) fn build_service() -> Arc<ScreeningService> {
    Arc::new(ScreeningService::new(web_config()))
}

pub(super) fn senior_request() -> ScreeningRequest {
    ScreeningRequest::new(SENIOR_JOB, mixed_pool()).with_position("Senior Developer")
}

pub(super) fn router_with_service(service: Arc<ScreeningService>) -> axum::Router {
    screening_router(service)
}

pub(super) async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json")
}

pub(super) async fn assert_unprocessable(response: Response, fragment: &str) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(
        message.contains(fragment),
        "expected '{fragment}' in '{message}'"
    );
}
