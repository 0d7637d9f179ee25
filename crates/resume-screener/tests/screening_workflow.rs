//! End-to-end screening scenarios driven through the public intake, service, and export API.

use std::fs;

use resume_screener::config::ScreeningSettings;
use resume_screener::workflows::screening::report::export::{report_file_name, run_report};
use resume_screener::workflows::screening::{
    pasted_candidate, sample_candidates, CandidateIntake, IntakeError, Recommendation,
    ScreeningConfig, ScreeningRequest, ScreeningService, SAMPLE_JOB_DESCRIPTION, SAMPLE_POSITION,
};

fn sample_run_names(workers: usize) -> Vec<(String, u8)> {
    let settings = ScreeningSettings {
        workers,
        ..ScreeningSettings::default()
    };
    let service = ScreeningService::new(ScreeningConfig::from_settings(&settings));
    let run = service
        .screen(
            ScreeningRequest::new(SAMPLE_JOB_DESCRIPTION, sample_candidates())
                .with_position(SAMPLE_POSITION),
        )
        .expect("sample run succeeds");
    run.results
        .into_iter()
        .map(|result| (result.candidate.name, result.breakdown.overall_score))
        .collect()
}

#[test]
fn sample_pool_ranks_against_sample_job() {
    let ranked = sample_run_names(1);
    let expected = [
        ("Michael Rodriguez", 88),
        ("David Kim", 85),
        ("Alex Johnson", 73),
        ("Emily Watson", 52),
        ("Sarah Chen", 50),
    ];
    let expected: Vec<(String, u8)> = expected
        .iter()
        .map(|(name, score)| (name.to_string(), *score))
        .collect();
    assert_eq!(ranked, expected);
}

#[test]
fn sample_run_is_independent_of_worker_count() {
    assert_eq!(sample_run_names(1), sample_run_names(4));
}

#[test]
fn sample_run_statistics_and_recommendations() {
    let service = ScreeningService::default();
    let run = service
        .screen(ScreeningRequest::new(
            SAMPLE_JOB_DESCRIPTION,
            sample_candidates(),
        ))
        .expect("sample run succeeds");

    assert_eq!(run.requirements.min_years, 5);
    assert_eq!(run.requirements.skills.len(), 13);
    assert_eq!(run.statistics.total, 5);
    assert_eq!(run.statistics.qualified, 3);
    assert_eq!(run.statistics.top_score, Some(88));
    assert_eq!(run.statistics.mean_score, Some(69.6));

    let recommendations: Vec<Recommendation> = run
        .results
        .iter()
        .map(|result| result.insights.recommendation)
        .collect();
    assert_eq!(
        recommendations,
        [
            Recommendation::StrongHire,
            Recommendation::StrongHire,
            Recommendation::Interview,
            Recommendation::NotRecommended,
            Recommendation::NotRecommended,
        ]
    );

    let michael = &run.results[0];
    assert!(michael
        .insights
        .insights
        .iter()
        .any(|insight| insight == "Active open source contributor"));
}

#[test]
fn text_directory_feeds_a_screening_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("maria_lopez.txt"),
        "Platform engineer, 9 years. Kubernetes, Docker, AWS. MS in Computer Engineering.",
    )
    .expect("write resume");
    fs::write(
        dir.path().join("sam_ortiz.txt"),
        "Frontend developer. Vue and Angular.",
    )
    .expect("write resume");

    let candidates = CandidateIntake::from_text_dir(dir.path()).expect("directory loads");
    assert_eq!(candidates.len(), 2);

    let run = ScreeningService::default()
        .screen(ScreeningRequest::new(
            "DevOps lead, 6+ years with Kubernetes, Docker and AWS",
            candidates,
        ))
        .expect("run succeeds");

    assert_eq!(run.results[0].candidate.name, "maria_lopez");
    assert_eq!(run.results[0].breakdown.skill_match_percent, 100);
    assert_eq!(run.results[0].breakdown.education_match_percent, 100);
    assert_eq!(run.results[1].breakdown.skill_match_percent, 0);
}

#[test]
fn csv_roster_round_trips_into_reports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = dir.path().join("roster.csv");
    fs::write(
        &roster,
        "Name,Email,Resume,Source\n\
         Jordan Lee,jordan@example.com,\"5 years of React and Node.js, mentor to juniors\",referral\n\
         Casey Fox,,\"Python scripts\",job board\n",
    )
    .expect("write roster");

    let candidates = CandidateIntake::from_csv_path(&roster).expect("roster loads");
    assert_eq!(candidates[1].email, "candidate2@email.com");

    let run = ScreeningService::default()
        .screen(ScreeningRequest::new("React and Node.js, 4 years", candidates))
        .expect("run succeeds");
    let report = run_report(&run);
    assert_eq!(report.matches("CANDIDATE ANALYSIS REPORT").count(), 2);
    assert!(report.contains("Position: -"));
    assert_eq!(report_file_name(&run.results[0].candidate.name), "Jordan_Lee_analysis.txt");
}

#[test]
fn roster_without_resume_column_is_rejected() {
    let err = CandidateIntake::from_csv_reader("name,email\nJordan,j@example.com\n".as_bytes())
        .expect_err("missing resume column");
    assert!(matches!(err, IntakeError::Csv(_)));
}

#[test]
fn pasted_resumes_become_numbered_candidates() {
    let candidates: Vec<_> = ["React for 2 years", "AWS and Docker"]
        .into_iter()
        .enumerate()
        .map(|(offset, text)| pasted_candidate(offset + 1, text))
        .collect();

    let run = ScreeningService::default()
        .screen(ScreeningRequest::new("React, AWS, Docker", candidates))
        .expect("run succeeds");
    assert_eq!(run.results[0].candidate.name, "Candidate 2");
    assert_eq!(run.results[1].candidate.email, "candidate1@email.com");
}
