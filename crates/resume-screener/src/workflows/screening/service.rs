use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{Candidate, RequirementSet, SkillVocabulary};
use super::ranking::{BatchRanker, Progress, RankedResult};
use super::report::BatchStatistics;
use super::requirements::RequirementExtractor;
use crate::config::ScreeningSettings;

/// Tuning for a [`ScreeningService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningConfig {
    pub minimum_score: u8,
    pub workers: usize,
    pub vocabulary: SkillVocabulary,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self::from_settings(&ScreeningSettings::default())
    }
}

impl ScreeningConfig {
    pub fn from_settings(settings: &ScreeningSettings) -> Self {
        let vocabulary = match &settings.vocabulary {
            Some(entries) => SkillVocabulary::new(entries.iter().cloned()),
            None => SkillVocabulary::standard(),
        };

        Self {
            minimum_score: settings.minimum_score,
            workers: settings.workers,
            vocabulary,
        }
    }
}

/// Caller input for one screening run. `minimum_score` is kept wide so out-of-range values
/// reach validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningRequest {
    pub job_description: String,
    pub position: Option<String>,
    pub minimum_score: Option<i64>,
    pub candidates: Vec<Candidate>,
}

impl ScreeningRequest {
    pub fn new(job_description: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            job_description: job_description.into(),
            candidates,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_minimum_score(mut self, minimum_score: i64) -> Self {
        self.minimum_score = Some(minimum_score);
        self
    }
}

/// Complete outcome of one screening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRun {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub requirements: RequirementSet,
    pub results: Vec<RankedResult>,
    pub statistics: BatchStatistics,
    pub generated_at: DateTime<Utc>,
}

impl ScreeningRun {
    /// Results at or above the run's minimum score, still in rank order.
    pub fn qualified(&self) -> impl Iterator<Item = &RankedResult> {
        let minimum_score = self.statistics.minimum_score;
        self.results
            .iter()
            .filter(move |result| result.breakdown.overall_score >= minimum_score)
    }
}

/// Validates caller input and drives extraction and ranking.
#[derive(Debug, Clone)]
pub struct ScreeningService {
    extractor: RequirementExtractor,
    ranker: BatchRanker,
    default_minimum_score: u8,
}

impl Default for ScreeningService {
    fn default() -> Self {
        Self::new(ScreeningConfig::default())
    }
}

impl ScreeningService {
    pub fn new(config: ScreeningConfig) -> Self {
        Self {
            extractor: RequirementExtractor::new(config.vocabulary),
            ranker: BatchRanker::with_workers(config.workers),
            default_minimum_score: config.minimum_score,
        }
    }

    pub fn default_minimum_score(&self) -> u8 {
        self.default_minimum_score
    }

    pub fn workers(&self) -> usize {
        self.ranker.workers()
    }

    pub fn requirements(&self, job_description: &str) -> Result<RequirementSet, ScreeningError> {
        if job_description.trim().is_empty() {
            return Err(ScreeningError::MissingJobDescription);
        }
        Ok(self.extractor.extract(job_description))
    }

    pub fn screen(&self, request: ScreeningRequest) -> Result<ScreeningRun, ScreeningError> {
        self.screen_with_progress(request, |_| {})
    }

    pub fn screen_with_progress<F>(
        &self,
        request: ScreeningRequest,
        observer: F,
    ) -> Result<ScreeningRun, ScreeningError>
    where
        F: FnMut(Progress) + Send,
    {
        let minimum_score = self.validate(&request)?;
        let requirements = self.extractor.extract(&request.job_description);
        debug!(
            skills = requirements.skills.len(),
            min_years = requirements.min_years,
            "screening requirements resolved"
        );

        let batch = self.ranker.rank_with_progress(
            &request.candidates,
            &requirements,
            minimum_score,
            observer,
        );

        info!(
            position = request.position.as_deref().unwrap_or("-"),
            candidates = batch.statistics.total,
            qualified = batch.statistics.qualified,
            top_score = ?batch.statistics.top_score,
            "screening run complete"
        );

        Ok(ScreeningRun {
            position: request.position,
            requirements,
            results: batch.results,
            statistics: batch.statistics,
            generated_at: Utc::now(),
        })
    }

    fn validate(&self, request: &ScreeningRequest) -> Result<u8, ScreeningError> {
        if request.job_description.trim().is_empty() {
            return Err(ScreeningError::MissingJobDescription);
        }
        if request.candidates.is_empty() {
            return Err(ScreeningError::EmptyCandidatePool);
        }
        if let Some(offset) = request
            .candidates
            .iter()
            .position(|candidate| candidate.resume_text.trim().is_empty())
        {
            return Err(ScreeningError::BlankResume(offset + 1));
        }

        match request.minimum_score {
            None => Ok(self.default_minimum_score),
            Some(score) => u8::try_from(score)
                .ok()
                .filter(|score| *score <= 100)
                .ok_or(ScreeningError::InvalidMinimumScore(score)),
        }
    }
}

/// Input rejected before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreeningError {
    #[error("job description must not be empty")]
    MissingJobDescription,
    #[error("at least one candidate is required")]
    EmptyCandidatePool,
    #[error("candidate {0} has no resume text")]
    BlankResume(usize),
    #[error("minimum score must be between 0 and 100 (got {0})")]
    InvalidMinimumScore(i64),
}
