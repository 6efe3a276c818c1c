//! Page-indexed JSONL export.
//!
//! One compact JSON object per line, one line per page, in page order:
//!
//! ```text
//! {"doc_id":"report.pdf","page":1,"text":"…"}
//! {"doc_id":"report.pdf","page":2,"text":"…"}
//! ```
//!
//! `serde_json` writes non-ASCII characters literally, so `"Größe"` stays
//! `"Größe"` rather than becoming `\u00f6` escapes.

use crate::error::PdfToolError;
use crate::pipeline::pdf::PdfEngine;
use crate::pipeline::write::{write_atomic, write_failed};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::ops::ControlFlow;
use std::path::Path;

/// One JSONL line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Source file name only, never the full path.
    pub doc_id: String,
    /// 1-indexed page number.
    pub page: usize,
    /// Trimmed page text.
    pub text: String,
}

impl PageRecord {
    pub fn new(doc_id: impl Into<String>, page: usize, raw_text: &str) -> Self {
        Self {
            doc_id: doc_id.into(),
            page,
            text: raw_text.trim().to_string(),
        }
    }
}

/// `doc_id` for a path: its file name, lossily converted to UTF-8.
pub fn doc_id(pdf_path: &Path) -> String {
    pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Serialise one record followed by `\n`; I/O errors are reported against `path`.
pub fn write_record(
    out: &mut dyn Write,
    record: &PageRecord,
    path: &Path,
) -> Result<(), PdfToolError> {
    let line = serde_json::to_string(record).map_err(|source| PdfToolError::Serialize {
        page: record.page,
        source,
    })?;
    out.write_all(line.as_bytes())
        .and_then(|_| out.write_all(b"\n"))
        .map_err(write_failed(path))
}

/// Write `jsonl_path` with one record per page of `pdf_path`.
///
/// Returns the number of records written.
pub fn write_jsonl(
    engine: &PdfEngine,
    pdf_path: &Path,
    jsonl_path: &Path,
) -> Result<usize, PdfToolError> {
    let id = doc_id(pdf_path);
    write_atomic(jsonl_path, |out| {
        engine.visit_pages(pdf_path, |page_num, text| {
            let record = PageRecord::new(id.as_str(), page_num, &text);
            write_record(out, &record, jsonl_path)?;
            Ok(ControlFlow::Continue(()))
        })
    })
}
