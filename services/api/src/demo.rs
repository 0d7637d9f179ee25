use crate::screen::render_summary;
use clap::Args;
use resume_screener::error::AppError;
use resume_screener::workflows::screening::report::export::{report_file_name, text_report};
use resume_screener::workflows::screening::{
    sample_candidates, ScreeningRequest, ScreeningService, SAMPLE_JOB_DESCRIPTION,
    SAMPLE_POSITION,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Qualifying score (0-100). Defaults to 65.
    #[arg(long)]
    pub(crate) min_score: Option<i64>,
    /// Print the full analysis report for the top-ranked candidate.
    #[arg(long)]
    pub(crate) show_report: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        min_score,
        show_report,
    } = args;

    let service = ScreeningService::default();
    let mut request = ScreeningRequest::new(SAMPLE_JOB_DESCRIPTION, sample_candidates())
        .with_position(SAMPLE_POSITION);
    request.minimum_score = min_score;
    let run = service.screen(request)?;

    println!("Resume screening demo");
    println!("{}", render_summary(&run));

    println!("Candidate highlights");
    for result in &run.results {
        println!(
            "- {} ({}%): skills {}% | experience {}% | education {}%",
            result.candidate.name,
            result.breakdown.overall_score,
            result.breakdown.skill_match_percent,
            result.breakdown.experience_match_percent,
            result.breakdown.education_match_percent
        );
        if !result.breakdown.missing_skills.is_empty() {
            println!("    missing: {}", result.breakdown.missing_skills.join(", "));
        }
        for insight in &result.insights.insights {
            println!("    {insight}");
        }
    }

    if show_report {
        if let Some(top) = run.results.first() {
            println!("\n{}", report_file_name(&top.candidate.name));
            println!(
                "{}",
                text_report(top, run.position.as_deref(), run.generated_at)
            );
        }
    }

    Ok(())
}
