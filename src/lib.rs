// fitmave: rank resumes against a job description.
//
// This is the library root. Each module corresponds to one stage of the
// ranking pipeline, plus the CLI-facing configuration and output layers.

pub mod config;
pub mod extract;
pub mod nlp;
pub mod output;
pub mod pipeline;
pub mod scoring;
