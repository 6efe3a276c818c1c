//! Text-layer detection and plain-text export.

use crate::error::PdfToolError;
use crate::pipeline::pdf::PdfEngine;
use crate::pipeline::write::{write_atomic, write_failed};
use std::io::Write;
use std::ops::ControlFlow;
use std::path::Path;
use tracing::debug;

/// Width of the `=` rule framing each page banner.
pub const BANNER_WIDTH: usize = 60;

/// True when this page's trimmed text is longer than `min_chars`.
///
/// A page with exactly `min_chars` characters does not count.
pub fn page_has_text(text: &str, min_chars: usize) -> bool {
    text.trim().chars().count() > min_chars
}

/// Check whether a PDF has an extractable text layer.
///
/// Stops at the first page that qualifies. Errors opening or reading the
/// document are returned; [`crate::extract`] treats them as "no text", which
/// routes the document to OCR.
pub fn has_text(
    engine: &PdfEngine,
    pdf_path: &Path,
    min_chars: usize,
) -> Result<bool, PdfToolError> {
    let mut found = false;
    engine.visit_pages(pdf_path, |page_num, text| {
        if page_has_text(&text, min_chars) {
            debug!("Page {} has a text layer", page_num);
            found = true;
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    })?;
    Ok(found)
}

/// Write one page, preceded by its banner.
pub fn write_page(out: &mut dyn Write, page_num: usize, text: &str) -> std::io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    write!(out, "\n\n{rule}\nPAGE {page_num}\n{rule}\n\n")?;
    out.write_all(text.as_bytes())
}

/// Extract every page of `pdf_path` into `txt_path`, one banner per page.
///
/// Returns the number of pages written.
pub fn extract_text(
    engine: &PdfEngine,
    pdf_path: &Path,
    txt_path: &Path,
) -> Result<usize, PdfToolError> {
    write_atomic(txt_path, |out| {
        engine.visit_pages(pdf_path, |page_num, text| {
            write_page(out, page_num, &text).map_err(write_failed(txt_path))?;
            Ok(ControlFlow::Continue(()))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater() {
        let fifty = "a".repeat(50);
        let fifty_one = "a".repeat(51);
        assert!(!page_has_text(&fifty, 50));
        assert!(page_has_text(&fifty_one, 50));
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let padded = format!("   \n\t{}\n\n   ", "x".repeat(50));
        assert!(!page_has_text(&padded, 50));
        assert!(!page_has_text("", 50));
        assert!(!page_has_text("   \n  ", 0));
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        // 30 two-byte characters: 60 bytes but only 30 chars.
        let umlauts = "ü".repeat(30);
        assert!(!page_has_text(&umlauts, 50));
    }

    #[test]
    fn inner_whitespace_counts() {
        let text = "word ".repeat(11);
        assert_eq!(text.trim().chars().count(), 54);
        assert!(page_has_text(&text, 50));
    }

    #[test]
    fn banner_layout() {
        let mut buf = Vec::new();
        write_page(&mut buf, 1, "Hello").unwrap();
        write_page(&mut buf, 2, "World").unwrap();
        let s = String::from_utf8(buf).unwrap();
        let rule = "=".repeat(60);
        assert_eq!(
            s,
            format!("\n\n{rule}\nPAGE 1\n{rule}\n\nHello\n\n{rule}\nPAGE 2\n{rule}\n\nWorld")
        );
    }
}
