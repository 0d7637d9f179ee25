use super::super::evaluation::{InsightTier, Recommendation, ScoreBreakdown};
use serde::{Deserialize, Serialize};

const LEADERSHIP_INSIGHT: &str = "Demonstrated leadership and mentoring experience";
const OPEN_SOURCE_INSIGHT: &str = "Active open source contributor";

/// Human-readable explanation of a breakdown. Everything here is derivable from the
/// breakdown plus the resume text it was scored from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightReport {
    pub tier: InsightTier,
    pub insights: Vec<String>,
    pub recommendation: Recommendation,
    pub recommendation_label: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, breakdown: &ScoreBreakdown, resume_text: &str) -> InsightReport {
        let tier = InsightTier::from_score(breakdown.overall_score);
        let mut insights: Vec<String> = tier
            .headlines()
            .iter()
            .map(|headline| headline.to_string())
            .collect();

        if breakdown.has_leadership_signal {
            insights.push(LEADERSHIP_INSIGHT.to_string());
        }

        if resume_text.to_lowercase().contains("open source") {
            insights.push(OPEN_SOURCE_INSIGHT.to_string());
        }

        let recommendation = breakdown.recommendation();

        InsightReport {
            tier,
            insights,
            recommendation,
            recommendation_label: recommendation.label().to_string(),
        }
    }
}
