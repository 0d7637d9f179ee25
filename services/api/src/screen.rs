use crate::infra::{load_pool, screening_service};
use clap::{Args, ValueEnum};
use resume_screener::config::AppConfig;
use resume_screener::error::AppError;
use resume_screener::telemetry;
use resume_screener::workflows::screening::report::export::{run_report, to_json, write_csv};
use resume_screener::workflows::screening::{ExportError, ScreeningRequest, ScreeningRun};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Ranked summary followed by one analysis report per candidate
    #[default]
    Text,
    /// Pretty-printed screening run
    Json,
    /// One row per ranked candidate
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// File containing the job description text
    #[arg(long)]
    pub(crate) job_description: PathBuf,
    /// Directory of plain-text resumes (*.txt), one candidate per file
    #[arg(long)]
    pub(crate) resumes_dir: Option<PathBuf>,
    /// CSV roster with name, email, and resume columns
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Add the built-in sample resumes to the pool
    #[arg(long)]
    pub(crate) samples: bool,
    /// Position title shown in reports
    #[arg(long)]
    pub(crate) position: Option<String>,
    /// Qualifying score (0-100); defaults to SCREENING_MIN_SCORE
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) min_score: Option<i64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Write the export to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Override SCREENING_WORKERS for this run
    #[arg(long)]
    pub(crate) workers: Option<usize>,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let job_description = fs::read_to_string(&args.job_description)?;
    let candidates = load_pool(
        args.resumes_dir.as_deref(),
        args.roster.as_deref(),
        args.samples,
    )?;
    let service = screening_service(&config.screening, args.workers);

    let request = ScreeningRequest {
        job_description,
        position: args.position,
        minimum_score: args.min_score,
        candidates,
    };
    let run = service.screen_with_progress(request, |progress| {
        debug!(
            completed = progress.completed,
            total = progress.total,
            percent = progress.percent,
            "scoring progress"
        );
    })?;

    let rendered = render(&run, args.format)?;
    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            info!(path = %path.display(), candidates = run.results.len(), "screening export written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

pub(crate) fn render(run: &ScreeningRun, format: OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n{}", render_summary(run), run_report(run))),
        OutputFormat::Json => to_json(run),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_csv(run, &mut buffer)?;
            Ok(String::from_utf8_lossy(&buffer).into_owned())
        }
    }
}

/// Short ranked overview of a run, shared by `screen` and `demo`.
pub(crate) fn render_summary(run: &ScreeningRun) -> String {
    let stats = &run.statistics;
    let mut out = String::new();

    writeln!(
        out,
        "Screening results{}",
        run.position
            .as_deref()
            .map(|position| format!(" for {position}"))
            .unwrap_or_default()
    )
    .expect("write summary");
    let skills = if run.requirements.skills.is_empty() {
        "none detected".to_string()
    } else {
        run.requirements.skills.join(", ")
    };
    writeln!(
        out,
        "Requirements: {skills} | minimum {} years",
        run.requirements.min_years
    )
    .expect("write summary");
    writeln!(
        out,
        "Qualified: {} of {} at {}%+ | average {} | top {}",
        stats.qualified,
        stats.total,
        stats.minimum_score,
        stats
            .mean_score
            .map(|mean| format!("{mean:.1}%"))
            .unwrap_or_else(|| "-".to_string()),
        stats
            .top_score
            .map(|top| format!("{top}%"))
            .unwrap_or_else(|| "-".to_string()),
    )
    .expect("write summary");

    for result in &run.results {
        let marker = if result.breakdown.overall_score >= stats.minimum_score {
            "*"
        } else {
            " "
        };
        writeln!(
            out,
            "{marker} {:>2}. {} <{}> {}% | {}",
            result.rank,
            result.candidate.name,
            result.candidate.email,
            result.breakdown.overall_score,
            result.insights.recommendation_label
        )
        .expect("write summary");
    }

    out
}
