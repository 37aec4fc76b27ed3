// Result types produced by a ranking run.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::scoring::{Decision, ScoreError};

/// A resume that was scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub name: String,
    /// Cosine similarity in [0.0, 1.0]
    pub score: f64,
    pub decision: Decision,
    /// Highest-weighted terms shared with the job description
    pub matched_terms: Vec<String>,
}

impl SimilarityResult {
    pub fn new(name: impl Into<String>, score: f64, matched_terms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            score,
            decision: Decision::from_score(score),
            matched_terms,
        }
    }

    /// Score rounded to two decimals, for display only.
    pub fn display_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

/// A resume that could not be extracted and was left out of scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    #[serde(rename = "reason", serialize_with = "serialize_reason")]
    pub error: ExtractError,
}

impl SkippedEntry {
    pub fn reason(&self) -> String {
        self.error.to_string()
    }
}

fn serialize_reason<S: Serializer>(error: &ExtractError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}

/// Whether any resume made it to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    Ranked,
    /// Every resume was skipped; the run finished with nothing to score.
    NoValidCandidates,
}

/// Outcome of a completed run. Both lists are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    pub status: RunStatus,
    /// Sorted by score, highest first; ties keep submission order
    pub results: Vec<SimilarityResult>,
    pub skipped: Vec<SkippedEntry>,
}

impl RankReport {
    pub fn recommended(&self) -> impl Iterator<Item = &SimilarityResult> {
        self.results
            .iter()
            .filter(|r| r.decision == Decision::Recommended)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &SimilarityResult> {
        self.results
            .iter()
            .filter(|r| r.decision == Decision::Rejected)
    }

    /// Number of resumes accounted for (scored + skipped).
    pub fn total(&self) -> usize {
        self.results.len() + self.skipped.len()
    }
}

/// Conditions that abort a run with no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("Error processing Job Description: {0}")]
    Reference(ExtractError),

    #[error("Error processing Job Description: {0}")]
    EmptyVocabulary(#[from] ScoreError),
}
