// Rule-based English tokenizer.
//
// Splitting follows the usual conventions for English text: whitespace
// separates chunks, leading and trailing punctuation become their own
// tokens, contraction suffixes (n't, 's, 're, ...) are split off, and
// hyphen/slash infixes separate compound words. Stop words come from the
// stop-words crate; lemmas from the rule-based Lemmatizer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use super::lemma::Lemmatizer;
use super::traits::{Token, Tokenizer};

static CONTRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(n['’]t|['’](?:s|re|ve|ll|d|m))$").expect("valid contraction pattern")
});

const INFIXES: &[char] = &['-', '/', '–', '—'];

pub struct EnglishTokenizer {
    stop_words: HashSet<String>,
    lemmatizer: Lemmatizer,
}

impl Default for EnglishTokenizer {
    fn default() -> Self {
        Self::with_lemmatizer(Lemmatizer::default())
    }
}

impl EnglishTokenizer {
    /// Use a customised lemmatizer (e.g. one extended from a TSV file).
    pub fn with_lemmatizer(lemmatizer: Lemmatizer) -> Self {
        Self {
            stop_words: english_stop_words(),
            lemmatizer,
        }
    }

    fn make_token(&self, surface: String) -> Token {
        let is_alpha = !surface.is_empty() && surface.chars().all(char::is_alphabetic);
        let lower = surface.to_lowercase();
        let is_stop = self.stop_words.contains(&lower);
        let lemma = if is_alpha {
            self.lemmatizer.lemmatize(&lower)
        } else {
            lower
        };

        Token {
            surface,
            lemma,
            is_alpha,
            is_stop,
        }
    }
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut surfaces = Vec::new();
        for chunk in text.split_whitespace() {
            split_chunk(chunk, &mut surfaces);
        }
        surfaces.into_iter().map(|s| self.make_token(s)).collect()
    }
}

/// The English stop word list shared by the tokenizer and the vectorizer.
///
/// This is the NLTK list: function words only. Content words like
/// "research", "work" or "test" must survive, since a job description made
/// of them would otherwise have no vocabulary.
pub fn english_stop_words() -> HashSet<String> {
    get(LANGUAGE::English)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
}

/// Split one whitespace-delimited chunk into surface forms.
fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    let mut rest = chunk;

    while let Some(c) = rest.chars().next() {
        if c.is_alphanumeric() {
            break;
        }
        out.push(c.to_string());
        rest = &rest[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    while let Some(c) = rest.chars().next_back() {
        if c.is_alphanumeric() {
            break;
        }
        trailing.push(c.to_string());
        rest = &rest[..rest.len() - c.len_utf8()];
    }
    trailing.reverse();

    if !rest.is_empty() {
        let (head, contraction) = match CONTRACTION.captures(rest) {
            Some(caps) => match (caps.get(1), caps.get(2)) {
                (Some(h), Some(t)) => (h.as_str(), Some(t.as_str())),
                _ => (rest, None),
            },
            None => (rest, None),
        };

        split_infixes(head, out);
        if let Some(tail) = contraction {
            out.push(tail.to_string());
        }
    }

    out.extend(trailing);
}

/// machine-learning -> machine, -, learning
fn split_infixes(word: &str, out: &mut Vec<String>) {
    let mut current = String::new();
    for c in word.chars() {
        if INFIXES.contains(&c) {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            out.push(c.to_string());
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}
