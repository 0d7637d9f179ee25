//! Resume screening: requirement extraction, candidate scoring, insights, and batch ranking,
//! plus the intake, export, service, and HTTP layers wrapped around them.
//!
//! The engine pieces (`requirements`, `evaluation`, `report` insights, `ranking`) are pure and
//! never fail. Input validation lives in [`service`].

pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod ranking;
pub mod report;
pub mod requirements;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, RequirementSet, SkillVocabulary, DEFAULT_MIN_YEARS, DEFAULT_SKILL_VOCABULARY,
};
pub use evaluation::{
    CandidateScorer, InsightTier, Recommendation, ScoreBreakdown, ScoreWeights, SCORE_WEIGHTS,
};
pub use intake::{
    generated_email, pasted_candidate, sample_candidates, CandidateIntake, IntakeError,
    SAMPLE_JOB_DESCRIPTION, SAMPLE_POSITION,
};
pub use ranking::{BatchRanker, Progress, RankedBatch, RankedResult};
pub use report::{BatchStatistics, ExportError, InsightGenerator, InsightReport};
pub use requirements::RequirementExtractor;
pub use router::{screening_router, CandidateInput, ScreeningRunRequest};
pub use service::{
    ScreeningConfig, ScreeningError, ScreeningRequest, ScreeningRun, ScreeningService,
};
