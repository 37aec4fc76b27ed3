// Unit tests for normalization.
//
// Exercises normalize() through the default English tokenizer and through a
// stub tokenizer, which is how callers plug in other linguistic models.

use fitmave::nlp::lemma::Lemmatizer;
use fitmave::nlp::{normalize, EnglishTokenizer, Token, Tokenizer};

/// Identity tokenizer: split on whitespace, lemma = surface, no stop words.
struct StubTokenizer;

impl Tokenizer for StubTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|w| Token {
                surface: w.to_string(),
                lemma: w.to_string(),
                is_alpha: w.chars().all(char::is_alphabetic),
                is_stop: false,
            })
            .collect()
    }
}

// ============================================================
// Default English tokenizer
// ============================================================

#[test]
fn english_lowercases_lemmatizes_and_filters() {
    let out = normalize(
        "The engineers were deploying Docker clusters!",
        &EnglishTokenizer::default(),
    );
    assert_eq!(out, "engineer deploy docker cluster");
}

#[test]
fn english_drops_numbers_and_mixed_tokens() {
    let out = normalize("Docker 2023 k8s Terraform", &EnglishTokenizer::default());
    assert_eq!(out, "docker terraform");
}

#[test]
fn english_splits_hyphenated_compounds() {
    let out = normalize("machine-learning pipelines", &EnglishTokenizer::default());
    assert_eq!(out, "machine learn pipeline");
}

#[test]
fn english_all_stop_words_gives_empty_string() {
    let out = normalize(
        "The and of to in it is was were be been",
        &EnglishTokenizer::default(),
    );
    assert_eq!(out, "");
}

#[test]
fn english_keeps_content_words() {
    let out = normalize(
        "Research scientist doing test work, results analysis, information systems experience.",
        &EnglishTokenizer::default(),
    );
    assert_eq!(
        out,
        "research scientist test work result analysis information system experience"
    );
}

#[test]
fn english_is_deterministic() {
    let text = "Led a team of engineers building Rust services; mentored juniors and designed APIs.";
    let tok = EnglishTokenizer::default();
    assert_eq!(normalize(text, &tok), normalize(text, &tok));
}

#[test]
fn english_uses_custom_lemmatizer() {
    let mut lemmatizer = Lemmatizer::default();
    lemmatizer.insert("postgresql", "postgres");
    let tok = EnglishTokenizer::with_lemmatizer(lemmatizer);
    assert_eq!(normalize("PostgreSQL", &tok), "postgres");
}

// ============================================================
// Stub tokenizer — the injection seam
// ============================================================

#[test]
fn stub_sees_lowercased_text() {
    assert_eq!(normalize("RUST Tokio", &StubTokenizer), "rust tokio");
}

#[test]
fn stub_non_alpha_tokens_dropped() {
    assert_eq!(normalize("rust 1.75 tokio", &StubTokenizer), "rust tokio");
}

#[test]
fn stub_preserves_order_and_duplicates() {
    assert_eq!(normalize("b a b a", &StubTokenizer), "b a b a");
}

#[test]
fn empty_text_normalizes_to_empty() {
    assert_eq!(normalize("", &StubTokenizer), "");
    assert_eq!(normalize("   \n\t", &EnglishTokenizer::default()), "");
}
