// JSON report for machine consumers.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::nlp::lemma::LEMMA_TABLE_VERSION;
use crate::pipeline::{RankReport, RunStatus};
use crate::scoring::{Decision, RECOMMEND_THRESHOLD};

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub job: &'a str,
    pub threshold: f64,
    /// Version of the lemmatizer rules the scores were computed with
    pub lemma_table: &'static str,
    pub status: RunStatus,
    pub results: Vec<JsonResult<'a>>,
    pub skipped: Vec<JsonSkipped<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonResult<'a> {
    pub rank: usize,
    pub name: &'a str,
    pub score: f64,
    pub display_score: f64,
    pub decision: Decision,
    pub matched_terms: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct JsonSkipped<'a> {
    pub name: &'a str,
    pub reason: String,
}

impl<'a> JsonReport<'a> {
    pub fn new(job: &'a str, report: &'a RankReport, generated_at: DateTime<Utc>) -> Self {
        let results = report
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| JsonResult {
                rank: i + 1,
                name: &r.name,
                score: r.score,
                display_score: r.display_score(),
                decision: r.decision,
                matched_terms: &r.matched_terms,
            })
            .collect();

        let skipped = report
            .skipped
            .iter()
            .map(|s| JsonSkipped {
                name: &s.name,
                reason: s.reason(),
            })
            .collect();

        Self {
            generated_at,
            job,
            threshold: RECOMMEND_THRESHOLD,
            lemma_table: LEMMA_TABLE_VERSION,
            status: report.status,
            results,
            skipped,
        }
    }
}

/// Render a report as pretty-printed JSON stamped with the current time.
pub fn render(job: &str, report: &RankReport) -> Result<String> {
    let json = JsonReport::new(job, report, Utc::now());
    Ok(serde_json::to_string_pretty(&json)?)
}
