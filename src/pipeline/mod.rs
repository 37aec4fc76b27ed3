// Pipeline orchestration — one job description against N resumes.

pub mod models;
pub mod rank;

pub use models::{PipelineError, RankReport, RunStatus, SimilarityResult, SkippedEntry};
pub use rank::{sort_results, Pipeline, DEFAULT_TOP_TERMS};
