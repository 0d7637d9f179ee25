use super::config::{
    BACHELORS_MARKERS, BACHELORS_SCORE, BASELINE_EDUCATION_SCORE, LEADERSHIP_MARKERS,
    MASTERS_MARKERS, MASTERS_SCORE, UNKNOWN_EXPERIENCE_SCORE,
};
use crate::workflows::screening::requirements::first_year_count;

pub(crate) struct SkillCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub percent: f64,
}

/// Splits the required skills into matched/missing, preserving requirement order.
/// An empty requirement list earns full credit.
pub(crate) fn skill_coverage(resume_lower: &str, skills: &[String]) -> SkillCoverage {
    let (matched, missing): (Vec<String>, Vec<String>) = skills
        .iter()
        .cloned()
        .partition(|skill| resume_lower.contains(&skill.to_lowercase()));

    let percent = if skills.is_empty() {
        100.0
    } else {
        matched.len() as f64 / skills.len() as f64 * 100.0
    };

    SkillCoverage {
        matched,
        missing,
        percent,
    }
}

pub(crate) struct ExperienceSignal {
    pub years: Option<u32>,
    pub percent: f64,
}

pub(crate) fn experience_signal(resume_text: &str, min_years: u32) -> ExperienceSignal {
    let years = first_year_count(resume_text);
    let percent = match years {
        None => UNKNOWN_EXPERIENCE_SCORE,
        Some(_) if min_years == 0 => 100.0,
        Some(years) => (years as f64 / min_years as f64 * 100.0).min(100.0),
    };

    ExperienceSignal { years, percent }
}

pub(crate) fn education_score(resume_lower: &str) -> f64 {
    if contains_any(resume_lower, &MASTERS_MARKERS) {
        MASTERS_SCORE
    } else if contains_any(resume_lower, &BACHELORS_MARKERS) {
        BACHELORS_SCORE
    } else {
        BASELINE_EDUCATION_SCORE
    }
}

pub(crate) fn has_leadership_signal(resume_lower: &str) -> bool {
    contains_any(resume_lower, &LEADERSHIP_MARKERS)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_of_empty_requirements_is_full() {
        let coverage = skill_coverage("anything", &[]);
        assert_eq!(coverage.percent, 100.0);
        assert!(coverage.matched.is_empty());
        assert!(coverage.missing.is_empty());
    }

    #[test]
    fn experience_caps_at_one_hundred() {
        let signal = experience_signal("12 years shipping software", 4);
        assert_eq!(signal.years, Some(12));
        assert_eq!(signal.percent, 100.0);
    }

    #[test]
    fn experience_is_proportional_below_requirement() {
        let signal = experience_signal("2 years", 4);
        assert_eq!(signal.percent, 50.0);
    }

    #[test]
    fn zero_year_requirement_does_not_divide_by_zero() {
        let signal = experience_signal("1 year", 0);
        assert_eq!(signal.percent, 100.0);
    }

    #[test]
    fn masters_outranks_bachelors() {
        assert_eq!(education_score("bachelor's and master's degrees"), 100.0);
        assert_eq!(education_score("bsc in physics"), 80.0);
        assert_eq!(education_score("self taught"), 50.0);
    }

    #[test]
    fn leadership_markers_match_inside_words() {
        assert!(has_leadership_signal("skilled in fault tolerance"));
        assert!(has_leadership_signal("mentored interns"));
        assert!(!has_leadership_signal("individual contributor"));
    }
}
