use serde::{Deserialize, Serialize};

/// Batch-level aggregates. `mean_score`, `top_score` and `qualified_pct` are `None` for an
/// empty batch rather than a division by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total: usize,
    pub qualified: usize,
    pub minimum_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_pct: Option<f32>,
}

impl BatchStatistics {
    pub fn from_scores<I>(scores: I, minimum_score: u8) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut total = 0usize;
        let mut qualified = 0usize;
        let mut sum = 0u64;
        let mut top: Option<u8> = None;

        for score in scores {
            total += 1;
            sum += u64::from(score);
            if score >= minimum_score {
                qualified += 1;
            }
            top = Some(top.map_or(score, |current| current.max(score)));
        }

        let (mean_score, qualified_pct) = if total == 0 {
            (None, None)
        } else {
            (
                Some(sum as f32 / total as f32),
                Some(qualified as f32 / total as f32 * 100.0),
            )
        };

        Self {
            total,
            qualified,
            minimum_score,
            mean_score,
            top_score: top,
            qualified_pct,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_reports_sentinels() {
        let stats = BatchStatistics::from_scores(Vec::new(), 65);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.qualified, 0);
        assert!(stats.mean_score.is_none());
        assert!(stats.top_score.is_none());
        assert!(stats.qualified_pct.is_none());
        assert!(stats.is_empty());

        let json = serde_json::to_value(&stats).expect("serialize");
        assert!(json.get("mean_score").is_none());
        assert!(json.get("top_score").is_none());
    }

    #[test]
    fn qualified_count_uses_inclusive_threshold() {
        let stats = BatchStatistics::from_scores([90, 65, 64, 40], 65);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.qualified, 2);
        assert_eq!(stats.top_score, Some(90));
        assert_eq!(stats.mean_score, Some(64.75));
        assert_eq!(stats.qualified_pct, Some(50.0));
    }
}
