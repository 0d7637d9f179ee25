//! Fixed rubric constants. These are not configurable at runtime.

/// Relative contribution of each sub-score to the overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub leadership: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.leadership
    }
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    skills: 0.50,
    experience: 0.30,
    education: 0.15,
    leadership: 0.05,
};

/// Raw leadership bonus before weighting; contributes at most half a point overall.
pub const LEADERSHIP_BONUS: f64 = 10.0;

/// Experience credit when a resume never states a year count.
pub const UNKNOWN_EXPERIENCE_SCORE: f64 = 30.0;

pub const MASTERS_SCORE: f64 = 100.0;
pub const BACHELORS_SCORE: f64 = 80.0;
pub const BASELINE_EDUCATION_SCORE: f64 = 50.0;

pub const MASTERS_MARKERS: [&str; 2] = ["master", "ms"];
pub const BACHELORS_MARKERS: [&str; 2] = ["bachelor", "bs"];
pub const LEADERSHIP_MARKERS: [&str; 3] = ["lead", "led", "mentor"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((SCORE_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
