// TF-IDF vectorizer with an explicit fit/transform split.
//
// `TfidfVectorizer::fit` learns a vocabulary and IDF weights from a set of
// documents and returns a `FittedTfidf`. Only the fitted value can transform
// text, so the vocabulary is defined once (by the job description) and every
// resume is projected into that same space. Terms a resume has that the
// reference lacks simply carry no weight.
//
// Weighting matches the common defaults: raw counts, smooth IDF
// ln((1 + n) / (1 + df)) + 1, L2-normalized rows.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::ScoreError;
use crate::nlp::english::english_stop_words;

/// Analyzer and weighting settings. Build one, then `fit` it.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Inclusive (min_n, max_n) word n-gram range
    pub ngram_range: (usize, usize),
    /// Tokens removed before n-grams are formed
    pub stop_words: HashSet<String>,
}

impl Default for TfidfVectorizer {
    /// Unigrams and bigrams with the English stop word list.
    fn default() -> Self {
        Self {
            ngram_range: (1, 2),
            stop_words: english_stop_words(),
        }
    }
}

/// A vocabulary and IDF vector learned from the fitted documents.
#[derive(Debug, Clone)]
pub struct FittedTfidf {
    ngram_range: (usize, usize),
    stop_words: HashSet<String>,
    vocabulary: BTreeMap<String, usize>,
    /// Terms by column index (sorted)
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new(ngram_range: (usize, usize), stop_words: HashSet<String>) -> Self {
        Self {
            ngram_range,
            stop_words,
        }
    }

    /// Learn vocabulary and IDF weights from `documents`.
    ///
    /// Fails with `EmptyVocabulary` if no document yields a single term
    /// after tokenization and stop word removal.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Result<FittedTfidf, ScoreError> {
        let analyzed: Vec<Vec<String>> = documents
            .iter()
            .map(|d| analyze(d.as_ref(), self.ngram_range, &self.stop_words))
            .collect();

        let terms: Vec<String> = analyzed
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if terms.is_empty() {
            return Err(ScoreError::EmptyVocabulary);
        }

        let vocabulary: BTreeMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let mut df = vec![0usize; terms.len()];
        for doc_terms in &analyzed {
            let unique: HashSet<&String> = doc_terms.iter().collect();
            for term in unique {
                df[vocabulary[term]] += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        Ok(FittedTfidf {
            ngram_range: self.ngram_range,
            stop_words: self.stop_words.clone(),
            vocabulary,
            terms,
            idf,
        })
    }
}

impl FittedTfidf {
    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Project text into the fitted space as an L2-normalized dense vector.
    ///
    /// Out-of-vocabulary terms are ignored. Text with no known terms gives
    /// the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for term in analyze(text, self.ngram_range, &self.stop_words) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        let mut weights = vec![0.0; self.terms.len()];
        for (idx, count) in counts {
            weights[idx] = count as f64 * self.idf[idx];
        }

        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in &mut weights {
                *w /= norm;
            }
        }
        weights
    }

    /// The `n` terms contributing most to the dot product of `a` and `b`.
    ///
    /// Ties break alphabetically so the list is stable across runs.
    pub fn shared_terms(&self, a: &[f64], b: &[f64], n: usize) -> Vec<String> {
        let mut shared: Vec<(f64, &String)> = a
            .iter()
            .zip(b)
            .zip(&self.terms)
            .filter(|((x, y), _)| **x > 0.0 && **y > 0.0)
            .map(|((x, y), term)| (x * y, term))
            .collect();

        shared.sort_by(|l, r| r.0.total_cmp(&l.0).then_with(|| l.1.cmp(r.1)));
        shared.into_iter().take(n).map(|(_, t)| t.clone()).collect()
    }
}

/// Lowercase, tokenize, drop stop words, then build word n-grams.
///
/// Tokens are maximal runs of word characters (alphanumeric or `_`) with at
/// least two characters; single characters never become terms.
pub fn analyze(text: &str, ngram_range: (usize, usize), stop_words: &HashSet<String>) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = word_runs(&lowered)
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !stop_words.contains(*t))
        .collect();

    let (min_n, max_n) = ngram_range;
    let mut grams = Vec::new();
    for n in min_n.max(1)..=max_n {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}

fn word_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
}
