use serde::{Deserialize, Serialize};

/// Technology keywords scanned for when no vocabulary override is configured.
pub const DEFAULT_SKILL_VOCABULARY: [&str; 18] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "FastAPI",
    "PostgreSQL",
    "MongoDB",
    "AWS",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Jenkins",
    "GitHub Actions",
    "Express",
    "Vue",
    "Angular",
];

/// Minimum years assumed when a job description never states one.
pub const DEFAULT_MIN_YEARS: u32 = 3;

/// A candidate as handed over by intake. The engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub resume_text: String,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        resume_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            resume_text: resume_text.into(),
        }
    }
}

/// Ordered keyword list the requirement extractor scans job descriptions for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary, dropping blank entries and case-insensitive duplicates while
    /// keeping first-seen order.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for entry in entries {
            let entry: String = entry.into();
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            if kept
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(trimmed))
            {
                continue;
            }
            kept.push(trimmed.to_string());
        }
        Self { entries: kept }
    }

    pub fn standard() -> Self {
        Self::new(DEFAULT_SKILL_VOCABULARY)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Skills and experience a job description asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    pub skills: Vec<String>,
    pub min_years: u32,
}

impl RequirementSet {
    pub fn new(skills: Vec<String>, min_years: u32) -> Self {
        Self { skills, min_years }
    }
}
