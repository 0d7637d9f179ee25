//! Candidate intake: turns text files, CSV rosters, pasted text, or the built-in samples into
//! [`Candidate`] records. None of this is consulted by the scoring engine itself.

mod parser;
mod samples;

pub use samples::{sample_candidates, SAMPLE_JOB_DESCRIPTION, SAMPLE_POSITION};

use super::domain::Candidate;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug)]
pub enum IntakeError {
    Io { path: PathBuf, source: std::io::Error },
    Csv(csv::Error),
    EmptyResume { row: usize },
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            IntakeError::Csv(err) => write!(f, "invalid candidate roster: {}", err),
            IntakeError::EmptyResume { row } => {
                write!(f, "candidate roster row {} has no resume text", row)
            }
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io { source, .. } => Some(source),
            IntakeError::Csv(err) => Some(err),
            IntakeError::EmptyResume { .. } => None,
        }
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Placeholder address used when intake has no email for the `index`-th candidate (1-based).
pub fn generated_email(index: usize) -> String {
    format!("candidate{index}@email.com")
}

/// A resume pasted into a form or terminal; named by its position in the pool.
pub fn pasted_candidate(index: usize, text: impl Into<String>) -> Candidate {
    Candidate::new(format!("Candidate {index}"), generated_email(index), text)
}

pub struct CandidateIntake;

impl CandidateIntake {
    /// Loads every `*.txt` file in `dir`, sorted by file name, naming each candidate after the
    /// file stem. Invalid UTF-8 is replaced rather than rejected; files with only whitespace
    /// are skipped.
    pub fn from_text_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<Candidate>, IntakeError> {
        let dir = dir.as_ref();
        let io_error = |source| IntakeError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(io_error)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<_, _>>()
            .map_err(io_error)?;
        paths.retain(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("txt"))
                    .unwrap_or(false)
        });
        paths.sort();

        let mut candidates = Vec::new();
        for path in paths {
            let bytes = std::fs::read(&path).map_err(|source| IntakeError::Io {
                path: path.clone(),
                source,
            })?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            if text.trim().is_empty() {
                warn!(path = %path.display(), "skipping empty resume file");
                continue;
            }

            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("Candidate {}", candidates.len() + 1));
            let email = generated_email(candidates.len() + 1);
            candidates.push(Candidate::new(name, email, text));
        }

        debug!(dir = %dir.display(), loaded = candidates.len(), "loaded resume directory");
        Ok(candidates)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, IntakeError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, IntakeError> {
        let records = parser::parse_roster(reader)?;
        let mut candidates = Vec::with_capacity(records.len());

        for (offset, record) in records.into_iter().enumerate() {
            let row = offset + 1;
            if record.resume.trim().is_empty() {
                return Err(IntakeError::EmptyResume { row });
            }
            let email = record.email.unwrap_or_else(|| generated_email(row));
            candidates.push(Candidate::new(record.name, email, record.resume));
        }

        Ok(candidates)
    }
}
