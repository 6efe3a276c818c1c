//! Result types reported back to the binaries.
//!
//! The pipelines never abort on a soft failure; instead they return one of
//! these reports and let the caller turn it into status lines.

use crate::error::PdfToolError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Document-level metadata read through pdfium.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub page_count: usize,
    pub pdf_version: String,
}

/// Which branch of the text-or-OCR decision was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// The original already had a text layer.
    Direct,
    /// OCR succeeded and the text came from the OCR'd copy.
    Ocr,
    /// OCR failed; text came from the original anyway (partial result).
    Fallback,
}

/// Outcome of one extractor invocation.
#[derive(Debug)]
pub struct ExtractionReport {
    pub route: Route,
    /// The `.txt` target.
    pub txt_path: PathBuf,
    /// The OCR'd intermediate, when OCR succeeded.
    pub ocr_pdf: Option<PathBuf>,
    /// Why OCR did not produce a file (only on [`Route::Fallback`]).
    pub ocr_error: Option<PdfToolError>,
    /// Pages written on success.
    pub extraction: Result<usize, PdfToolError>,
}

impl ExtractionReport {
    /// True when a `.txt` file was written.
    pub fn wrote_text(&self) -> bool {
        self.extraction.is_ok()
    }
}

/// Outcome of one converter invocation. Each step is reported independently.
#[derive(Debug)]
pub struct ConversionReport {
    pub markdown_path: PathBuf,
    pub markdown: Result<(), PdfToolError>,
    pub jsonl_path: PathBuf,
    /// Records written on success.
    pub jsonl: Result<usize, PdfToolError>,
}

/// A single planned rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameDecision {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of one sanitiser invocation.
#[derive(Debug, Default)]
pub struct SanitizeReport {
    /// Renames performed (or planned, on a dry run).
    pub renamed: Vec<RenameDecision>,
    /// Files whose sanitised stem would be empty.
    pub skipped_empty: Vec<PathBuf>,
    /// Per-file failures; the walk continued past each one.
    pub errors: Vec<PdfToolError>,
}

impl SanitizeReport {
    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }
}
