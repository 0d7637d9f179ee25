use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::domain::{RequirementSet, SkillVocabulary, DEFAULT_MIN_YEARS};

static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)\+?\s*years?").expect("years pattern compiles"));

/// Returns the integer in the first "<n>[+] year(s)" phrase of `text`, if any.
///
/// Counts that overflow `u32` saturate instead of being discarded.
pub(crate) fn first_year_count(text: &str) -> Option<u32> {
    let captures = YEARS_PATTERN.captures(text)?;
    let digits = captures.get(1)?.as_str();
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Derives a [`RequirementSet`] from job-description text using a fixed keyword vocabulary.
#[derive(Debug, Clone, Default)]
pub struct RequirementExtractor {
    vocabulary: SkillVocabulary,
}

impl RequirementExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn extract(&self, job_description: &str) -> RequirementSet {
        let haystack = job_description.to_lowercase();
        let skills: Vec<String> = self
            .vocabulary
            .entries()
            .iter()
            .filter(|skill| haystack.contains(&skill.to_lowercase()))
            .cloned()
            .collect();

        let min_years = first_year_count(job_description).unwrap_or(DEFAULT_MIN_YEARS);

        debug!(
            skills = skills.len(),
            vocabulary = self.vocabulary.len(),
            min_years,
            "extracted job requirements"
        );

        RequirementSet { skills, min_years }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(entries: &[&str]) -> RequirementExtractor {
        RequirementExtractor::new(SkillVocabulary::new(entries.iter().copied()))
    }

    #[test]
    fn skills_follow_vocabulary_order_not_text_order() {
        let requirements = extractor(&["React", "Node.js", "AWS"])
            .extract("AWS first, then node.js, finally REACT");
        assert_eq!(requirements.skills, ["React", "Node.js", "AWS"]);
    }

    #[test]
    fn min_years_reads_first_years_phrase() {
        let requirements =
            extractor(&[]).extract("Senior role: 5+ years backend, 2 years leading teams");
        assert_eq!(requirements.min_years, 5);
    }

    #[test]
    fn min_years_accepts_singular_and_missing_space() {
        assert_eq!(extractor(&[]).extract("at least 1year").min_years, 1);
        assert_eq!(extractor(&[]).extract("7 YEARS minimum").min_years, 7);
    }

    #[test]
    fn min_years_defaults_when_absent() {
        let requirements = extractor(&["Python"]).extract("Python developer wanted");
        assert_eq!(requirements.min_years, DEFAULT_MIN_YEARS);
        assert_eq!(requirements.skills, ["Python"]);
    }

    #[test]
    fn unknown_text_yields_empty_skill_set() {
        let requirements = RequirementExtractor::default().extract("");
        assert!(requirements.skills.is_empty());
        assert_eq!(requirements.min_years, 3);
    }

    #[test]
    fn oversized_year_counts_saturate() {
        assert_eq!(first_year_count("99999999999 years"), Some(u32::MAX));
    }

    #[test]
    fn default_extractor_uses_standard_vocabulary() {
        let requirements = RequirementExtractor::default()
            .extract("We use TypeScript, Docker and GitHub Actions on GCP");
        assert_eq!(
            requirements.skills,
            ["TypeScript", "GCP", "Docker", "GitHub Actions"]
        );
    }
}
