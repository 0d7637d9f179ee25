use metrics_exporter_prometheus::PrometheusHandle;
use resume_screener::config::ScreeningSettings;
use resume_screener::workflows::screening::{
    Candidate, CandidateIntake, IntakeError, ScreeningConfig, ScreeningService,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the engine from configuration, letting a CLI flag override the worker count.
pub(crate) fn screening_service(
    settings: &ScreeningSettings,
    workers: Option<usize>,
) -> ScreeningService {
    let mut config = ScreeningConfig::from_settings(settings);
    if let Some(workers) = workers {
        config.workers = workers.max(1);
    }
    ScreeningService::new(config)
}

/// Collects candidates from every requested source, in the order directory, roster, samples.
pub(crate) fn load_pool(
    resumes_dir: Option<&Path>,
    roster: Option<&Path>,
    include_samples: bool,
) -> Result<Vec<Candidate>, IntakeError> {
    let mut pool = Vec::new();
    if let Some(dir) = resumes_dir {
        pool.extend(CandidateIntake::from_text_dir(dir)?);
    }
    if let Some(roster) = roster {
        pool.extend(CandidateIntake::from_csv_path(roster)?);
    }
    if include_samples {
        pool.extend(resume_screener::workflows::screening::sample_candidates());
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_override_wins_over_settings() {
        let settings = ScreeningSettings {
            minimum_score: 70,
            ..ScreeningSettings::default()
        };
        let service = screening_service(&settings, Some(6));
        assert_eq!(service.workers(), 6);
        assert_eq!(service.default_minimum_score(), 70);
    }

    #[test]
    fn zero_worker_override_is_clamped_to_one() {
        let settings = ScreeningSettings {
            workers: 3,
            ..ScreeningSettings::default()
        };
        assert_eq!(screening_service(&settings, Some(0)).workers(), 1);
        assert_eq!(screening_service(&settings, None).workers(), 3);
    }

    #[test]
    fn pool_without_sources_is_empty() {
        let pool = load_pool(None, None, false).expect("no sources");
        assert!(pool.is_empty());
    }

    #[test]
    fn samples_are_appended_last() {
        let pool = load_pool(None, None, true).expect("samples load");
        assert_eq!(pool.len(), 5);
        assert_eq!(pool[0].name, "Alex Johnson");
    }
}
