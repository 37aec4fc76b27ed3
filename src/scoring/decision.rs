// Recommendation decision — a fixed threshold on the similarity score.

use serde::Serialize;

/// Scores at or above this are recommended.
pub const RECOMMEND_THRESHOLD: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Recommended,
    Rejected,
}

impl Decision {
    /// Classify a similarity score. The threshold is inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= RECOMMEND_THRESHOLD {
            Decision::Recommended
        } else {
            Decision::Rejected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Recommended => "Recommended",
            Decision::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
