//! Sample Report Generator
//!
//! Builds the single-page demo certificate report served at `/api/report`.
//! Nothing about the request influences the output: every call produces the
//! same bytes (no creation dates, no document IDs).
//!
//! Courier is used throughout so line widths are exact and the title can be
//! centred without font metrics tables.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

pub const REPORT_FILENAME: &str = "sample-report.pdf";

// US Letter, points
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 72;

const FONT_NAME: &str = "Courier";
// Courier advance width is 600/1000 em for every glyph
const GLYPH_WIDTH_PER_MILLE: i64 = 600;

const TITLE_SIZE: i64 = 20;
const BODY_SIZE: i64 = 11;
const BODY_LEADING: i64 = 15;
const TITLE_GAP: i64 = 40;

/// Body wrap width in characters for the 468pt text column
pub const WRAP_COLUMNS: usize =
    ((PAGE_WIDTH - 2 * MARGIN) * 1000 / (GLYPH_WIDTH_PER_MILLE * BODY_SIZE)) as usize;

pub const REPORT_TITLE: &str = "Autograph Authentication Report";

pub const REPORT_BODY: &str = "\
Certificate: VALID123
Issued: 2024-01-01
Item: Sample signed memorabilia

This sample report illustrates the format of an Authenticon certificate. A \
real report records the item under examination, the signature attributed to \
it and the observations our examiners made while comparing the signature \
against known exemplars.

Each certificate carries a unique verification code. Anyone holding the item \
can confirm that the certificate was genuinely issued by entering the code on \
the verification page of our website.

This document is provided for demonstration purposes only and does not \
certify any item.";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the fixed sample report to PDF bytes.
pub fn generate_sample_report() -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FONT_NAME,
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let content = Content {
        operations: page_operations(),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    debug!(bytes = buffer.len(), "Rendered sample report");
    Ok(buffer)
}

fn page_operations() -> Vec<Operation> {
    let title_y = PAGE_HEIGHT - MARGIN;
    let body_y = title_y - TITLE_GAP;

    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), TITLE_SIZE.into()]),
        Operation::new("Td", vec![centered_x(REPORT_TITLE, TITLE_SIZE).into(), title_y.into()]),
        Operation::new("Tj", vec![Object::string_literal(REPORT_TITLE)]),
        Operation::new("ET", vec![]),
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), BODY_SIZE.into()]),
        Operation::new("TL", vec![BODY_LEADING.into()]),
        Operation::new("Td", vec![MARGIN.into(), body_y.into()]),
    ];

    for line in wrap_text(REPORT_BODY, WRAP_COLUMNS) {
        if !line.is_empty() {
            ops.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        }
        ops.push(Operation::new("T*", vec![]));
    }

    ops.push(Operation::new("ET", vec![]));
    ops
}

/// Left edge that centres `text` on the page at `size` points
fn centered_x(text: &str, size: i64) -> i64 {
    let width = text.chars().count() as i64 * GLYPH_WIDTH_PER_MILLE * size / 1000;
    (PAGE_WIDTH - width) / 2
}

/// Greedy word wrap. Newlines are kept as hard breaks (blank lines survive);
/// words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: &str = word;
            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split = word
                    .char_indices()
                    .nth(width)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                lines.push(word[..split].to_string());
                word = &word[split..];
            }
            if word.is_empty() {
                continue;
            }

            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_starts_with_pdf_signature() {
        let bytes = generate_sample_report().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn test_report_is_byte_identical_across_calls() {
        let first = generate_sample_report().unwrap();
        for _ in 0..3 {
            assert_eq!(generate_sample_report().unwrap(), first);
        }
    }

    #[test]
    fn test_report_has_one_page() {
        let bytes = generate_sample_report().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_wrap_columns_fit_text_width() {
        assert_eq!(WRAP_COLUMNS, 70);
        for line in wrap_text(REPORT_BODY, WRAP_COLUMNS) {
            assert!(line.chars().count() <= WRAP_COLUMNS, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        let lines = wrap_text("one\n\ntwo", 10);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let lines = wrap_text("abcdefghij k", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij k"]);
    }

    #[test]
    fn test_title_is_centered() {
        let x = centered_x(REPORT_TITLE, TITLE_SIZE);
        let width = REPORT_TITLE.len() as i64 * 12;
        assert_eq!(x * 2 + width, PAGE_WIDTH);
    }
}
