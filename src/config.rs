use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::nlp::lemma::{Lemmatizer, LEMMA_TABLE_VERSION};
use crate::nlp::EnglishTokenizer;
use crate::pipeline::DEFAULT_TOP_TERMS;

/// How `rank` prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal table (default)
    Table,
    /// Pretty-printed JSON on stdout
    Json,
}

/// CLI configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. None of
/// these settings reach the ranking core's semantics: the threshold and the
/// minimum text length are fixed constants.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_format: OutputFormat,
    /// Optional `form<TAB>lemma` file merged into the lemmatizer (FITMAVE_LEMMAS)
    pub lemma_overrides: Option<PathBuf>,
    /// Matched terms shown per resume (FITMAVE_TOP_TERMS)
    pub top_terms: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` uses the process
    /// environment; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup("FITMAVE_OUTPUT").as_deref().map(str::trim) {
            None | Some("") | Some("table") => OutputFormat::Table,
            Some("json") => OutputFormat::Json,
            Some(other) => bail!("FITMAVE_OUTPUT must be `table` or `json`, got `{other}`"),
        };

        let lemma_overrides = lookup("FITMAVE_LEMMAS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let top_terms = match lookup("FITMAVE_TOP_TERMS") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("FITMAVE_TOP_TERMS must be a whole number, got `{raw}`"))?,
            _ => DEFAULT_TOP_TERMS,
        };

        Ok(Self {
            output_format,
            lemma_overrides,
            top_terms,
        })
    }

    /// Build the English tokenizer, merging the lemma override file if set.
    pub fn build_tokenizer(&self) -> Result<EnglishTokenizer> {
        let mut lemmatizer = Lemmatizer::default();
        tracing::debug!(version = LEMMA_TABLE_VERSION, "Using built-in lemma table");

        if let Some(path) = &self.lemma_overrides {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read lemma file {}", path.display()))?;
            let added = lemmatizer
                .extend_from_tsv(&contents)
                .with_context(|| format!("Invalid lemma file {}", path.display()))?;
            tracing::info!(path = %path.display(), entries = added, "Loaded lemma overrides");
        }

        Ok(EnglishTokenizer::with_lemmatizer(lemmatizer))
    }
}
