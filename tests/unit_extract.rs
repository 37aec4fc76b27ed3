// Unit tests for document extraction.
//
// Covers format dispatch, the shared length guard, and failure mapping for
// each handler. DOCX fixtures are assembled in memory with zip::ZipWriter.

use std::io::{Cursor, Write};

use fitmave::extract::{extract, Document, DocumentFormat, ExtractError, MIN_TEXT_CHARS};
use fitmave::pipeline::{Pipeline, RunStatus};
use zip::write::SimpleFileOptions;

const RESUME_TEXT: &str = "Backend engineer with seven years of Rust, Tokio and Postgres experience.";

fn stored() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored)
}

fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        zip.start_file(*name, stored()).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    );
    build_zip(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/document.xml", xml.as_str()),
    ])
}

/// A one-page PDF showing `line` in Helvetica, with a correct xref table.
fn build_pdf(line: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({line}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        tail.push_str(&format!("{offset:010} 00000 n \n"));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(tail.as_bytes());
    pdf
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================
// Format detection
// ============================================================

#[test]
fn format_detection_is_case_insensitive() {
    assert_eq!(Document::new("CV.PDF", vec![]).format, Some(DocumentFormat::Pdf));
    assert_eq!(Document::new("cv.Docx", vec![]).format, Some(DocumentFormat::Docx));
    assert_eq!(Document::new("cv.TXT", vec![]).format, Some(DocumentFormat::Txt));
}

#[test]
fn unknown_suffix_is_unsupported() {
    let doc = Document::new("resume.rtf", RESUME_TEXT.as_bytes().to_vec());
    assert_eq!(doc.format, None);
    assert_eq!(extract(&doc), Err(ExtractError::UnsupportedFormat));
}

#[test]
fn declared_format_overrides_name() {
    let doc = Document::with_format("upload-1234", RESUME_TEXT.as_bytes().to_vec(), DocumentFormat::Txt);
    let extracted = extract(&doc).unwrap();
    assert_eq!(extracted.source_name, "upload-1234");
    assert_eq!(extracted.text, RESUME_TEXT);
}

// ============================================================
// TXT
// ============================================================

#[test]
fn txt_extracts_verbatim() {
    let doc = Document::new("alice.txt", RESUME_TEXT.as_bytes().to_vec());
    assert_eq!(extract(&doc).unwrap().text, RESUME_TEXT);
}

#[test]
fn txt_ten_characters_is_corrupted() {
    let doc = Document::new("tiny.txt", b"Rust, SQL.".to_vec());
    assert_eq!(extract(&doc), Err(ExtractError::Corrupted));
}

#[test]
fn txt_just_below_minimum_is_corrupted() {
    let text = "x".repeat(MIN_TEXT_CHARS - 1);
    let doc = Document::new("short.txt", text.into_bytes());
    assert_eq!(extract(&doc), Err(ExtractError::Corrupted));
}

#[test]
fn txt_whitespace_only_is_corrupted() {
    let doc = Document::new("blank.txt", " \n".repeat(60).into_bytes());
    assert_eq!(extract(&doc), Err(ExtractError::Corrupted));
}

#[test]
fn txt_length_counts_untrimmed_text() {
    // Short content padded past the minimum passes the guard
    let text = format!("Rust engineer{}", " ".repeat(MIN_TEXT_CHARS));
    let doc = Document::new("padded.txt", text.clone().into_bytes());
    assert_eq!(extract(&doc).unwrap().text, text);
}

#[test]
fn txt_invalid_utf8_is_decode_error() {
    let mut bytes = RESUME_TEXT.as_bytes().to_vec();
    bytes.push(0xff);
    let doc = Document::new("latin1.txt", bytes);
    match extract(&doc) {
        Err(ExtractError::Decode(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected decode error, got {other:?}"),
    }
}

// ============================================================
// DOCX
// ============================================================

#[test]
fn docx_paragraphs_joined_by_newline() {
    let bytes = build_docx(&[
        "Jane Doe",
        "Senior platform engineer",
        "Rust, Kubernetes, Terraform and Postgres in production since 2017",
    ]);
    let doc = Document::new("jane.docx", bytes);
    let text = extract(&doc).unwrap().text;
    assert_eq!(
        text,
        "Jane Doe\nSenior platform engineer\nRust, Kubernetes, Terraform and Postgres in production since 2017"
    );
}

#[test]
fn docx_with_too_little_text_is_corrupted() {
    let doc = Document::new("empty.docx", build_docx(&["Hi"]));
    assert_eq!(extract(&doc), Err(ExtractError::Corrupted));
}

#[test]
fn docx_without_document_xml_is_decode_error() {
    let bytes = build_zip(&[("[Content_Types].xml", "<Types/>")]);
    let doc = Document::new("hollow.docx", bytes);
    assert!(matches!(extract(&doc), Err(ExtractError::Decode(_))));
}

#[test]
fn docx_that_is_not_a_zip_is_decode_error() {
    let doc = Document::new("fake.docx", RESUME_TEXT.as_bytes().to_vec());
    assert!(matches!(extract(&doc), Err(ExtractError::Decode(_))));
}

#[test]
fn docx_with_malformed_xml_is_decode_error() {
    let bytes = build_zip(&[("word/document.xml", "<w:document><w:body><w:p></w:body>")]);
    let doc = Document::new("broken.docx", bytes);
    assert!(matches!(extract(&doc), Err(ExtractError::Decode(_))));
}

// ============================================================
// PDF
// ============================================================

#[test]
fn pdf_text_layer_is_extracted() {
    let doc = Document::new("resume.pdf", build_pdf(RESUME_TEXT));
    let extracted = extract(&doc).unwrap();
    assert_eq!(extracted.source_name, "resume.pdf");
    assert!(
        collapse_whitespace(&extracted.text).contains(RESUME_TEXT),
        "unexpected text: {:?}",
        extracted.text
    );
}

#[test]
fn pdf_with_too_little_text_is_corrupted() {
    let doc = Document::new("stub.pdf", build_pdf("Rust"));
    assert_eq!(extract(&doc), Err(ExtractError::Corrupted));
}

#[test]
fn pdf_resume_is_scored_by_pipeline() {
    let job = Document::new(
        "job.txt",
        b"Hiring a backend engineer for Rust services using Tokio and Postgres.".to_vec(),
    );
    let resume = Document::new("resume.pdf", build_pdf(RESUME_TEXT));

    let report = Pipeline::default().run(&job, &[resume]).unwrap();
    assert_eq!(report.status, RunStatus::Ranked);
    assert!(report.skipped.is_empty());
    assert_eq!(report.results[0].name, "resume.pdf");
    assert!(report.results[0].score > 0.0);
}

#[test]
fn pdf_garbage_is_decode_error_not_panic() {
    let doc = Document::new("scan.pdf", b"%PDF-1.4\nnot really a pdf at all".to_vec());
    assert!(matches!(extract(&doc), Err(ExtractError::Decode(_))));
}
