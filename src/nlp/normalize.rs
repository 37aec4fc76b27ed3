// Text normalization — raw text to a space-joined stream of lemmas.

use super::traits::Tokenizer;

/// Reduce text to its content lemmas.
///
/// The text is lowercased first, then tokenized. A token survives only if
/// it is alphabetic and not a stop word; its lemma is emitted. Order is
/// preserved and repeats are kept. The result may be empty.
pub fn normalize(text: &str, tokenizer: &dyn Tokenizer) -> String {
    let lowered = text.to_lowercase();

    tokenizer
        .tokenize(&lowered)
        .into_iter()
        .filter(|t| t.is_alpha && !t.is_stop)
        .map(|t| t.lemma)
        .filter(|lemma| !lemma.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::traits::Token;

    /// Whitespace tokenizer with a fixed stop list and identity lemmas.
    struct WhitespaceTokenizer;

    impl Tokenizer for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Vec<Token> {
            text.split_whitespace()
                .map(|w| Token {
                    surface: w.to_string(),
                    lemma: w.trim_end_matches('s').to_string(),
                    is_alpha: w.chars().all(char::is_alphabetic),
                    is_stop: matches!(w, "the" | "and" | "a"),
                })
                .collect()
        }
    }

    #[test]
    fn test_filters_and_lemmatizes() {
        let out = normalize("The Engineers and a 3d Designer", &WhitespaceTokenizer);
        assert_eq!(out, "engineer designer");
    }

    #[test]
    fn test_keeps_repeats_in_order() {
        let out = normalize("rust go rust", &WhitespaceTokenizer);
        assert_eq!(out, "rust go rust");
    }

    #[test]
    fn test_all_stop_words_is_empty() {
        assert_eq!(normalize("the and a the", &WhitespaceTokenizer), "");
    }
}
