// Document extraction — raw upload bytes to plain text.
//
// Each supported format gets one handler function; dispatch happens on the
// declared format, never on the file contents. Every failure is folded into
// an ExtractError so nothing escapes this boundary as a panic or a foreign
// error type.

pub mod docx;
pub mod pdf;
pub mod txt;

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Extracted text shorter than this (in chars) is treated as corrupted.
pub const MIN_TEXT_CHARS: usize = 50;

/// The formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Derive the format from a file name suffix (case-insensitive).
    ///
    /// Returns `None` for anything other than `.pdf`, `.docx` or `.txt`.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::Txt),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A single uploaded document, held in memory for one pipeline run.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
    /// `None` when the name carries no supported suffix.
    pub format: Option<DocumentFormat>,
}

impl Document {
    /// Build a document whose format is derived from its name.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let format = DocumentFormat::from_name(&name);
        Self {
            name,
            bytes,
            format,
        }
    }

    /// Build a document with an explicitly declared format.
    pub fn with_format(name: impl Into<String>, bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self {
            name: name.into(),
            bytes,
            format: Some(format),
        }
    }
}

/// Plain text pulled out of a document that passed the length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub source_name: String,
    pub text: String,
}

/// Why a document could not be turned into usable text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Unsupported file format")]
    UnsupportedFormat,

    #[error("File appears empty or corrupted")]
    Corrupted,

    #[error("Error processing file: {0}")]
    Decode(String),
}

/// Extract plain text from a document.
///
/// Dispatches on the declared format, then applies the same length check
/// to every format so degenerate extractions (a scanned PDF with no text
/// layer, a near-empty TXT) are reported instead of silently scored.
pub fn extract(doc: &Document) -> Result<ExtractedText, ExtractError> {
    let format = doc.format.ok_or(ExtractError::UnsupportedFormat)?;

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_text(&doc.bytes)?,
        DocumentFormat::Docx => docx::extract_text(&doc.bytes)?,
        DocumentFormat::Txt => txt::extract_text(&doc.bytes)?,
    };

    check_length(&text)?;

    debug!(
        name = %doc.name,
        format = %format,
        chars = text.chars().count(),
        "Extracted document text"
    );

    Ok(ExtractedText {
        source_name: doc.name.clone(),
        text,
    })
}

/// Reject text that is blank after trimming or shorter than MIN_TEXT_CHARS.
///
/// The length is measured on the untrimmed text; only the emptiness test
/// looks at the trimmed form.
fn check_length(text: &str) -> Result<(), ExtractError> {
    if text.trim().is_empty() || text.chars().count() < MIN_TEXT_CHARS {
        return Err(ExtractError::Corrupted);
    }
    Ok(())
}
