//! Observer traits for pipeline events.
//!
//! The library never prints. Binaries pass an observer to receive events as
//! the pipeline runs and turn them into status lines, spinners or logs. All
//! methods have default no-op implementations so callers only override what
//! they care about; [`NoopObserver`] ignores everything.
//!
//! # Example
//!
//! ```rust
//! use pdftriage::ExtractionObserver;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! #[derive(Default)]
//! struct OcrFlag(AtomicBool);
//!
//! impl ExtractionObserver for OcrFlag {
//!     fn on_ocr_start(&self, _input: &std::path::Path, _output: &std::path::Path) {
//!         self.0.store(true, Ordering::SeqCst);
//!     }
//! }
//! ```

use crate::error::PdfToolError;
use crate::output::RenameDecision;
use std::path::Path;

/// Events from [`crate::extract::extract_or_ocr`].
pub trait ExtractionObserver {
    /// Called once before text detection.
    fn on_document_start(&self, pdf: &Path) {
        let _ = pdf;
    }

    /// The text layer could not be read; the document is treated as having
    /// none and goes to OCR.
    fn on_text_check_failed(&self, error: &PdfToolError) {
        let _ = error;
    }

    /// The document has a text layer; extracting it directly.
    fn on_direct_extraction(&self, pdf: &Path) {
        let _ = pdf;
    }

    /// No text layer found; the OCR tool is about to run.
    fn on_ocr_start(&self, input: &Path, output: &Path) {
        let _ = (input, output);
    }

    /// OCR finished successfully; extracting text from its output.
    fn on_ocr_complete(&self, output: &Path) {
        let _ = output;
    }

    /// OCR failed; extracting whatever the original has.
    fn on_ocr_failed(&self, error: &PdfToolError) {
        let _ = error;
    }
}

/// Events from [`crate::sanitize::sanitize_tree`].
pub trait SanitizeObserver {
    /// A file was renamed (or would be, on a dry run).
    fn on_rename(&self, decision: &RenameDecision, dry_run: bool) {
        let _ = (decision, dry_run);
    }

    /// A file's sanitised stem is empty, so it is left alone.
    fn on_skip_empty(&self, path: &Path) {
        let _ = path;
    }

    /// A single rename failed; the walk continues.
    fn on_error(&self, error: &PdfToolError) {
        let _ = error;
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}
impl SanitizeObserver for NoopObserver {}
