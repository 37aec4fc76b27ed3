// DOCX text extraction.
//
// A .docx file is a ZIP container; the body text lives in word/document.xml.
// We stream that XML with quick-xml and rebuild the text of each top-level
// paragraph (direct children of <w:body>). Paragraphs nested inside tables,
// text boxes, headers and footers are not part of the document's paragraph
// list and are skipped. Within a paragraph only run text counts: a text box
// anchored in a run (and its VML fallback copy) contributes nothing.
// Paragraphs are joined with "\n".

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Elements that may sit between a paragraph and its runs.
const RUN_CONTAINERS: &[&[u8]] = &[b"r", b"hyperlink", b"ins", b"smartTag", b"fldSimple"];

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let xml = read_document_xml(bytes)?;
    let paragraphs = body_paragraphs(&xml)?;
    Ok(paragraphs.join("\n"))
}

fn read_document_xml(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Decode(format!("Failed to open DOCX container: {e}")))?;

    let mut entry = archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| ExtractError::Decode(format!("Missing {DOCUMENT_XML}: {e}")))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Decode(format!("Failed to read {DOCUMENT_XML}: {e}")))?;
    Ok(xml)
}

/// Collect the text of every paragraph that is a direct child of <w:body>.
///
/// Within a paragraph, text comes from <w:t> elements; <w:tab/> becomes a
/// tab, <w:br/> and <w:cr/> become newlines and <w:noBreakHyphen/> a hyphen.
/// Matching is on local names so the `w:` prefix binding does not matter.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    // Local names of the currently open elements, outermost first
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // Stack depth of the top-level paragraph being read, if any
    let mut paragraph_depth: Option<usize> = None;
    let mut current = String::new();
    let mut paragraphs = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::Decode(format!("Malformed {DOCUMENT_XML}: {e}")))?;

        match event {
            Event::Start(ref e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && paragraph_depth.is_none() && parent_is_body(&stack) {
                    paragraph_depth = Some(stack.len());
                    current.clear();
                }
                stack.push(name);
            }

            Event::Empty(ref e) => {
                let name = e.local_name();
                let name = name.as_ref();
                if let Some(depth) = paragraph_depth {
                    if !is_run_path(&stack[depth + 1..]) {
                        continue;
                    }
                    match name {
                        b"tab" => current.push('\t'),
                        b"br" | b"cr" => current.push('\n'),
                        b"noBreakHyphen" => current.push('-'),
                        _ => {}
                    }
                } else if name == b"p" && parent_is_body(&stack) {
                    // <w:p/> is an empty paragraph but still a paragraph
                    paragraphs.push(String::new());
                }
            }

            Event::Text(ref e) => {
                if paragraph_depth.is_some_and(|depth| in_run_text(&stack, depth)) {
                    let text = e
                        .unescape()
                        .map_err(|e| ExtractError::Decode(format!("Bad text run: {e}")))?;
                    current.push_str(&text);
                }
            }

            Event::CData(ref e) => {
                if paragraph_depth.is_some_and(|depth| in_run_text(&stack, depth)) {
                    current.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }

            Event::End(_) => {
                stack.pop();
                if paragraph_depth == Some(stack.len()) {
                    paragraphs.push(std::mem::take(&mut current));
                    paragraph_depth = None;
                }
            }

            Event::Eof => break,

            _ => {}
        }
    }

    Ok(paragraphs)
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|n| n == b"body")
}

/// The open element is a <w:t> inside a run of the paragraph at `depth`.
fn in_run_text(stack: &[Vec<u8>], depth: usize) -> bool {
    match stack.split_last() {
        Some((last, ancestors)) if last == b"t" && ancestors.len() > depth => {
            is_run_path(&ancestors[depth + 1..])
        }
        _ => false,
    }
}

/// `path` (the elements below the paragraph) ends in a run and passes only
/// through run containers. Rules out pPr tab stops, drawings and fallbacks.
fn is_run_path(path: &[Vec<u8>]) -> bool {
    path.last().is_some_and(|n| n == b"r")
        && path.iter().all(|n| RUN_CONTAINERS.contains(&n.as_slice()))
}
