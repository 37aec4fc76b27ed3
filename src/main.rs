use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use fitmave::config::{Config, OutputFormat};
use fitmave::extract::{self, Document, DocumentFormat};
use fitmave::output::{json, terminal};
use fitmave::pipeline::Pipeline;

/// fitmave: rank resumes against a job description.
///
/// Extracts text from PDF, DOCX and TXT files, normalizes it, and scores
/// every resume by TF-IDF cosine similarity to the job description.
#[derive(Parser)]
#[command(name = "fitmave", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank resumes against a job description
    Rank {
        /// The job description (pdf, docx or txt)
        #[arg(long, short)]
        job: PathBuf,

        /// Resume files, ranked in the order given when scores tie
        resumes: Vec<PathBuf>,

        /// Also rank every pdf/docx/txt file in this directory (sorted by name)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print the report as JSON (overrides FITMAVE_OUTPUT)
        #[arg(long)]
        json: bool,
    },

    /// Print the text extracted from a document
    Extract {
        file: PathBuf,
    },

    /// Print the normalized lemma stream for a document
    Normalize {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fitmave=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Rank {
            job,
            resumes,
            dir,
            json: as_json,
        } => {
            let reference = load_document(&job)?;

            let mut paths = resumes;
            if let Some(dir) = dir {
                paths.extend(list_supported_files(&dir)?);
            }
            if paths.is_empty() {
                bail!("No resumes given. Pass resume files or --dir <DIR>.");
            }

            let candidates = paths
                .iter()
                .map(|p| load_document(p))
                .collect::<Result<Vec<_>>>()?;

            info!(
                job = %reference.name,
                resumes = candidates.len(),
                "Analyzing resumes"
            );

            let pipeline = Pipeline::new(Box::new(config.build_tokenizer()?))
                .with_top_terms(config.top_terms);

            let pb = ProgressBar::new(candidates.len() as u64);
            pb.set_style(ProgressStyle::default_bar().template("  Processing [{bar:30}] {pos}/{len} {msg}")?);

            let outcome = pipeline.run_observed(&reference, &candidates, |doc| {
                pb.set_message(doc.name.clone());
                pb.inc(1);
            });
            pb.finish_and_clear();

            let report = match outcome {
                Ok(report) => report,
                Err(e) => {
                    // No partial output: the job description itself is unusable
                    terminal::display_fatal(&e.to_string());
                    std::process::exit(1);
                }
            };

            if as_json || config.output_format == OutputFormat::Json {
                println!("{}", json::render(&reference.name, &report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Extract { file } => {
            let doc = load_document(&file)?;
            match extract::extract(&doc) {
                Ok(extracted) => println!("{}", extracted.text),
                Err(e) => bail!("{}: {e}", doc.name),
            }
        }

        Commands::Normalize { file } => {
            let doc = load_document(&file)?;
            let extracted = extract::extract(&doc).map_err(|e| anyhow::anyhow!("{}: {e}", doc.name))?;
            let pipeline = Pipeline::new(Box::new(config.build_tokenizer()?));
            let normalized = pipeline.normalize(&extracted.text);
            if normalized.is_empty() {
                println!("{}", "(no content words)".dimmed());
            } else {
                println!("{normalized}");
            }
        }
    }

    Ok(())
}

/// Read a file into a Document named after its file name.
fn load_document(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(name, bytes))
}

/// Files in `dir` with a supported suffix, sorted by file name.
fn list_supported_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        let supported = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(DocumentFormat::from_name)
            .is_some();
        if path.is_file() && supported {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
