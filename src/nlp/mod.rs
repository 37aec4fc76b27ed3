// Linguistic normalization — tokenizer trait, default English tokenizer,
// lemmatizer and the normalize() entry point.

pub mod english;
pub mod lemma;
pub mod normalize;
pub mod traits;

pub use english::EnglishTokenizer;
pub use normalize::normalize;
pub use traits::{Token, Tokenizer};
