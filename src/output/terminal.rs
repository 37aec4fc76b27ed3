// Colored terminal output for ranking reports.

use colored::Colorize;

use crate::pipeline::{RankReport, RunStatus};
use crate::scoring::{Decision, RECOMMEND_THRESHOLD};

const NAME_WIDTH: usize = 36;

/// Display the ranked results table followed by any skipped files.
pub fn display_report(report: &RankReport) {
    if report.status == RunStatus::NoValidCandidates {
        println!("{} No valid resumes processed.", "!".yellow().bold());
    } else {
        display_results(report);
    }

    display_skipped(report);
}

fn display_results(report: &RankReport) {
    println!(
        "\n{}",
        format!("=== Resume Matching Results ({} resumes) ===", report.results.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<width$} {:>5}  {:<11}  {}",
        "Rank".dimmed(),
        "Resume".dimmed(),
        "Score".dimmed(),
        "Status".dimmed(),
        "Matched terms".dimmed(),
        width = NAME_WIDTH,
    );
    println!("  {}", "-".repeat(84).dimmed());

    for (i, result) in report.results.iter().enumerate() {
        let name = super::truncate_chars(&result.name, NAME_WIDTH - 3);
        println!(
            "  {:>4}. {:<width$} {:>5.2}  {:<11}  {}",
            i + 1,
            name,
            result.display_score(),
            colorize_decision(result.decision),
            result.matched_terms.join(", ").dimmed(),
            width = NAME_WIDTH,
        );
    }

    println!();

    let recommended = report.recommended().count();
    let rejected = report.rejected().count();
    println!(
        "  {} recommended, {} rejected (threshold {:.2})",
        recommended.to_string().green().bold(),
        rejected.to_string().red(),
        RECOMMEND_THRESHOLD,
    );
}

fn display_skipped(report: &RankReport) {
    if report.skipped.is_empty() {
        return;
    }

    println!("\n{}", "=== Skipped Files ===".bold());
    for entry in &report.skipped {
        println!("  {} {} - {}", "x".red(), entry.name, entry.reason().dimmed());
    }
    println!();
}

/// Display a fatal error that stopped the run.
pub fn display_fatal(message: &str) {
    eprintln!("{} {}", "!".red().bold(), message.red());
}

fn colorize_decision(decision: Decision) -> colored::ColoredString {
    match decision {
        Decision::Recommended => decision.as_str().green().bold(),
        Decision::Rejected => decision.as_str().red(),
    }
}
