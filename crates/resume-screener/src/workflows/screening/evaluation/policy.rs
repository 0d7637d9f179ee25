use serde::{Deserialize, Serialize};

/// Hiring recommendation attached to every scored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongHire,
    Interview,
    PhoneScreen,
    NotRecommended,
}

impl Recommendation {
    /// Cut points are 80 / 70 / 60. They intentionally differ from [`InsightTier`].
    pub const fn from_score(overall_score: u8) -> Self {
        if overall_score >= 80 {
            Self::StrongHire
        } else if overall_score >= 70 {
            Self::Interview
        } else if overall_score >= 60 {
            Self::PhoneScreen
        } else {
            Self::NotRecommended
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongHire => "Strong Hire — Schedule Interview",
            Self::Interview => "Recommended for Interview",
            Self::PhoneScreen => "Consider for Phone Screen",
            Self::NotRecommended => "Not Recommended",
        }
    }
}

/// Band used to pick the two headline insights for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTier {
    Excellent,
    Good,
    Limited,
}

impl InsightTier {
    /// Cut points are 80 / 65.
    pub const fn from_score(overall_score: u8) -> Self {
        if overall_score >= 80 {
            Self::Excellent
        } else if overall_score >= 65 {
            Self::Good
        } else {
            Self::Limited
        }
    }

    pub const fn headlines(self) -> [&'static str; 2] {
        match self {
            Self::Excellent => [
                "Excellent match for the position",
                "Strong technical skills aligned with requirements",
            ],
            Self::Good => [
                "Good candidate with relevant experience",
                "Meets most core requirements",
            ],
            Self::Limited => [
                "Limited alignment with job requirements",
                "May need additional training or experience",
            ],
        }
    }
}
