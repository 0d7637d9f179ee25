//! Renders screening runs for people and spreadsheets: per-candidate text reports, pretty JSON,
//! and a flat CSV table.

use std::fmt::Write as _;
use std::io::Write;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::super::ranking::RankedResult;
use super::super::service::ScreeningRun;

const REPORT_TITLE: &str = "CANDIDATE ANALYSIS REPORT";
const REPORT_RULE_WIDTH: usize = 50;
const REPORT_FOOTER: &str = "Generated by Resume Screener";

const CSV_HEADERS: [&str; 10] = [
    "Rank",
    "Name",
    "Email",
    "Overall Score",
    "Skills Match",
    "Experience Match",
    "Education Match",
    "Recommendation",
    "Matched Skills",
    "Missing Skills",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Plain-text analysis of one ranked candidate, including the resume verbatim.
pub fn text_report(
    result: &RankedResult,
    position: Option<&str>,
    generated_at: DateTime<Utc>,
) -> String {
    let breakdown = &result.breakdown;
    let mut out = String::new();

    writeln!(out, "{REPORT_TITLE}").expect("write report");
    writeln!(out, "{}", "=".repeat(REPORT_RULE_WIDTH)).expect("write report");
    out.push('\n');
    writeln!(out, "Name: {}", result.candidate.name).expect("write report");
    writeln!(out, "Email: {}", result.candidate.email).expect("write report");
    writeln!(out, "Position: {}", position.unwrap_or("-")).expect("write report");
    out.push('\n');
    writeln!(out, "OVERALL SCORE: {}%", breakdown.overall_score).expect("write report");
    writeln!(
        out,
        "Recommendation: {}",
        result.insights.recommendation_label
    )
    .expect("write report");
    out.push('\n');
    out.push_str("DETAILED SCORES:\n");
    writeln!(out, "- Skills Match: {}%", breakdown.skill_match_percent).expect("write report");
    writeln!(
        out,
        "- Experience Match: {}%",
        breakdown.experience_match_percent
    )
    .expect("write report");
    writeln!(
        out,
        "- Education Match: {}%",
        breakdown.education_match_percent
    )
    .expect("write report");
    out.push('\n');
    out.push_str("MATCHED SKILLS:\n");
    for skill in &breakdown.matched_skills {
        writeln!(out, "✓ {skill}").expect("write report");
    }
    out.push('\n');
    out.push_str("MISSING SKILLS:\n");
    for skill in &breakdown.missing_skills {
        writeln!(out, "✗ {skill}").expect("write report");
    }
    out.push('\n');
    out.push_str("AI INSIGHTS:\n");
    for insight in &result.insights.insights {
        writeln!(out, "{insight}").expect("write report");
    }
    out.push('\n');
    out.push_str("RESUME:\n");
    writeln!(out, "{}", result.candidate.resume_text).expect("write report");
    out.push('\n');
    out.push_str("---\n");
    writeln!(out, "{REPORT_FOOTER}").expect("write report");
    writeln!(
        out,
        "Date: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .expect("write report");

    out
}

/// Every text report in a run, in rank order, separated by blank lines.
pub fn run_report(run: &ScreeningRun) -> String {
    run.results
        .iter()
        .map(|result| text_report(result, run.position.as_deref(), run.generated_at))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"Ada  Lovelace"` becomes `"Ada_Lovelace_analysis.txt"`.
pub fn report_file_name(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_analysis.txt")
}

pub fn to_json(run: &ScreeningRun) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(run)?)
}

pub fn write_csv<W: Write>(run: &ScreeningRun, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for result in &run.results {
        let breakdown = &result.breakdown;
        csv_writer.write_record([
            result.rank.to_string(),
            result.candidate.name.clone(),
            result.candidate.email.clone(),
            breakdown.overall_score.to_string(),
            breakdown.skill_match_percent.to_string(),
            breakdown.experience_match_percent.to_string(),
            breakdown.education_match_percent.to_string(),
            result.insights.recommendation_label.clone(),
            breakdown.matched_skills.join(", "),
            breakdown.missing_skills.join(", "),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
