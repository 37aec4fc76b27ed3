// Similarity scoring — TF-IDF over the job description, cosine per resume.

pub mod decision;
pub mod similarity;
pub mod tfidf;

use thiserror::Error;
use tracing::debug;

pub use decision::{Decision, RECOMMEND_THRESHOLD};
pub use similarity::cosine_similarity;
pub use tfidf::{FittedTfidf, TfidfVectorizer};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("the job description has no terms left to compare against (empty vocabulary)")]
    EmptyVocabulary,
}

/// Score for one candidate, with the terms that drove it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub score: f64,
    pub matched_terms: Vec<String>,
}

/// Batched scorer: fits once on the reference, transforms every candidate.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    vectorizer: TfidfVectorizer,
}

impl Scorer {
    pub fn new(vectorizer: TfidfVectorizer) -> Self {
        Self { vectorizer }
    }

    /// Similarity of each candidate to the reference, in candidate order.
    pub fn score<S: AsRef<str>>(&self, reference: &str, candidates: &[S]) -> Result<Vec<f64>, ScoreError> {
        Ok(self
            .score_detailed(reference, candidates, 0)?
            .into_iter()
            .map(|c| c.score)
            .collect())
    }

    /// Like `score`, also reporting up to `top_terms` shared terms per candidate.
    ///
    /// The vocabulary is fit on the reference alone and reused for every
    /// candidate; candidates never influence each other's scores.
    pub fn score_detailed<S: AsRef<str>>(
        &self,
        reference: &str,
        candidates: &[S],
        top_terms: usize,
    ) -> Result<Vec<CandidateScore>, ScoreError> {
        let fitted = self.vectorizer.fit(&[reference])?;
        let reference_vec = fitted.transform(reference);

        debug!(
            vocabulary = fitted.vocabulary_len(),
            candidates = candidates.len(),
            "Fitted TF-IDF vocabulary on job description"
        );

        Ok(candidates
            .iter()
            .map(|candidate| {
                let candidate_vec = fitted.transform(candidate.as_ref());
                CandidateScore {
                    score: cosine_similarity(&reference_vec, &candidate_vec),
                    matched_terms: fitted.shared_terms(&reference_vec, &candidate_vec, top_terms),
                }
            })
            .collect())
    }
}
