// Ranking pipeline: extract -> normalize -> score -> classify -> sort.
//
// The job description is handled strictly (any failure aborts the run);
// resumes are handled leniently (a failure moves that resume to the skipped
// list and the run carries on). Scoring is one batched call so the
// vocabulary is fit on the job description exactly once.

use tracing::{debug, info, warn};

use super::models::{PipelineError, RankReport, RunStatus, SimilarityResult, SkippedEntry};
use crate::extract::{self, Document};
use crate::nlp::{normalize, EnglishTokenizer, Tokenizer};
use crate::scoring::Scorer;

/// Default number of matched terms reported per resume.
pub const DEFAULT_TOP_TERMS: usize = 5;

pub struct Pipeline {
    tokenizer: Box<dyn Tokenizer>,
    scorer: Scorer,
    top_terms: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Box::new(EnglishTokenizer::default()))
    }
}

impl Pipeline {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            tokenizer,
            scorer: Scorer::default(),
            top_terms: DEFAULT_TOP_TERMS,
        }
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    /// Normalize text with this pipeline's tokenizer.
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, self.tokenizer.as_ref())
    }

    /// Rank `candidates` against `reference`.
    pub fn run(&self, reference: &Document, candidates: &[Document]) -> Result<RankReport, PipelineError> {
        self.run_observed(reference, candidates, |_| {})
    }

    /// Same as `run`, calling `observe` after each resume has been extracted
    /// and normalized (or skipped).
    pub fn run_observed<F>(
        &self,
        reference: &Document,
        candidates: &[Document],
        mut observe: F,
    ) -> Result<RankReport, PipelineError>
    where
        F: FnMut(&Document),
    {
        // Step 1: the job description must extract cleanly
        let reference_text = extract::extract(reference).map_err(PipelineError::Reference)?;
        let reference_norm = self.normalize(&reference_text.text);
        debug!(
            name = %reference.name,
            lemmas = reference_norm.split_whitespace().count(),
            "Normalized job description"
        );

        // Step 2: resumes, each isolated from the others
        let mut names = Vec::new();
        let mut texts = Vec::new();
        let mut skipped = Vec::new();

        for doc in candidates {
            match extract::extract(doc) {
                Ok(extracted) => {
                    names.push(doc.name.clone());
                    texts.push(self.normalize(&extracted.text));
                }
                Err(error) => {
                    warn!(name = %doc.name, error = %error, "Skipping resume");
                    skipped.push(SkippedEntry {
                        name: doc.name.clone(),
                        error,
                    });
                }
            }
            observe(doc);
        }

        if texts.is_empty() {
            info!(skipped = skipped.len(), "No valid resumes processed");
            return Ok(RankReport {
                status: RunStatus::NoValidCandidates,
                results: Vec::new(),
                skipped,
            });
        }

        // Step 3: one batched scoring call against the job description
        let scores = self
            .scorer
            .score_detailed(&reference_norm, &texts, self.top_terms)?;

        let results = names
            .into_iter()
            .zip(scores)
            .map(|(name, s)| SimilarityResult::new(name, s.score, s.matched_terms))
            .collect();
        let results = sort_results(results);

        info!(
            scored = results.len(),
            skipped = skipped.len(),
            "Ranking complete"
        );

        Ok(RankReport {
            status: RunStatus::Ranked,
            results,
            skipped,
        })
    }
}

/// Sort by score descending. The sort is stable, so equal scores keep
/// their submission order.
pub fn sort_results(mut results: Vec<SimilarityResult>) -> Vec<SimilarityResult> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}
