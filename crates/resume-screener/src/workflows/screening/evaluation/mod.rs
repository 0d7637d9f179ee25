mod config;
mod policy;
mod rules;

pub use config::{ScoreWeights, SCORE_WEIGHTS};
pub use policy::{InsightTier, Recommendation};

use super::domain::{Candidate, RequirementSet};
use config::LEADERSHIP_BONUS;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the fixed rubric to one candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateScorer;

impl CandidateScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, candidate: &Candidate, requirements: &RequirementSet) -> ScoreBreakdown {
        let resume_lower = candidate.resume_text.to_lowercase();

        let coverage = rules::skill_coverage(&resume_lower, &requirements.skills);
        let experience = rules::experience_signal(&candidate.resume_text, requirements.min_years);
        let education = rules::education_score(&resume_lower);
        let has_leadership_signal = rules::has_leadership_signal(&resume_lower);

        let leadership = if has_leadership_signal {
            LEADERSHIP_BONUS
        } else {
            0.0
        };
        let weighted = coverage.percent * SCORE_WEIGHTS.skills
            + experience.percent * SCORE_WEIGHTS.experience
            + education * SCORE_WEIGHTS.education
            + leadership * SCORE_WEIGHTS.leadership;

        ScoreBreakdown {
            skill_match_percent: as_percent(coverage.percent),
            experience_match_percent: as_percent(experience.percent),
            education_match_percent: as_percent(education),
            overall_score: as_percent(weighted),
            matched_skills: coverage.matched,
            missing_skills: coverage.missing,
            has_leadership_signal,
            experience_years: experience.years,
        }
    }
}

fn as_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Per-candidate assessment; every percentage is an integer in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match_percent: u8,
    pub experience_match_percent: u8,
    pub education_match_percent: u8,
    pub overall_score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub has_leadership_signal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
}

impl ScoreBreakdown {
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_score(self.overall_score)
    }
}
