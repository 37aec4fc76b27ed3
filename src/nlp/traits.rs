// Tokenizer trait — the injected linguistic capability.
//
// Normalization only needs four facts per token: its surface form, its
// lemma, whether it is purely alphabetic, and whether it is a stop word.
// Anything that can answer those (a rule-based English tokenizer, a stub in
// tests, a bridge to a statistical model) can drive the pipeline.

/// One token as seen by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    /// Dictionary base form. Equal to `surface` when no rule applies.
    pub lemma: String,
    pub is_alpha: bool,
    pub is_stop: bool,
}

/// Trait for splitting text into annotated tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same token sequence.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}
