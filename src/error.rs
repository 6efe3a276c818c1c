//! Error types for the pdftriage library.
//!
//! Every fallible operation returns [`PdfToolError`]. Each variant carries a
//! [`Severity`]:
//!
//! * [`Severity::Fatal`] — the invocation cannot do any useful work (input
//!   missing, pdfium library unavailable, bad configuration). The binaries
//!   exit with code 1.
//!
//! * [`Severity::Soft`] — one step failed (OCR tool missing, OCR exited
//!   non-zero, a page could not be read, an output could not be written).
//!   The pipeline logs it, falls back or skips that output, and the process
//!   still exits 0.

use std::path::PathBuf;
use thiserror::Error;

/// How an error affects the running invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Stop immediately, exit non-zero.
    Fatal,
    /// Log, degrade or skip, keep going.
    Soft,
}

/// All errors returned by the pdftriage library.
#[derive(Debug, Error)]
pub enum PdfToolError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Sanitiser root does not exist or is not a directory.
    #[error("Directory not found: '{path}'")]
    NotADirectory { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    // ── Configuration ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Core PDF library ──────────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
You can:\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium (or pass --pdfium-lib).\n\
  • Place libpdfium next to the working directory.\n\
  • Install pdfium into a system library path.\n"
    )]
    PdfiumBindingFailed(String),

    /// pdfium could not open the document.
    #[error("PDF '{path}' could not be opened: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// pdfium failed to load a page or its text layer.
    #[error("Page {page}: text extraction failed: {detail}")]
    PageText { page: usize, detail: String },

    // ── OCR ───────────────────────────────────────────────────────────────
    /// The OCR binary is not on `PATH`.
    #[error("{tool} not installed. Skipping OCR.")]
    OcrToolMissing { tool: String },

    /// The OCR process could not be started.
    #[error("Could not start {tool}: {source}")]
    OcrSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The OCR process exited with a non-zero status.
    #[error("{tool} exited with {}: {stderr}", code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    OcrFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    // ── Markdown ──────────────────────────────────────────────────────────
    /// Built without the `markdown` feature.
    #[error("Markdown renderer not available (built without the `markdown` feature)")]
    MarkdownUnavailable,

    /// The renderer returned an error or panicked.
    #[error("Markdown conversion failed: {0}")]
    MarkdownFailed(String),

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write an output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page record could not be serialised.
    #[error("Failed to serialise page {page}: {source}")]
    Serialize {
        page: usize,
        #[source]
        source: serde_json::Error,
    },

    // ── Sanitiser ─────────────────────────────────────────────────────────
    /// A single rename failed.
    #[error("Failed to rename '{from}' -> '{to}': {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal hit an unreadable entry.
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl PdfToolError {
    /// Classify the error for the calling binary.
    pub fn severity(&self) -> Severity {
        match self {
            PdfToolError::FileNotFound { .. }
            | PdfToolError::NotADirectory { .. }
            | PdfToolError::PermissionDenied { .. }
            | PdfToolError::InvalidConfig(_)
            | PdfToolError::PdfiumBindingFailed(_) => Severity::Fatal,
            _ => Severity::Soft,
        }
    }

    /// Shorthand for `severity() == Severity::Fatal`.
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PdfToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_fatal() {
        let e = PdfToolError::FileNotFound {
            path: PathBuf::from("nope.pdf"),
        };
        assert!(e.is_fatal());
        assert!(e.to_string().contains("nope.pdf"));
    }

    #[test]
    fn missing_ocr_tool_is_soft() {
        let e = PdfToolError::OcrToolMissing {
            tool: "ocrmypdf".into(),
        };
        assert_eq!(e.severity(), Severity::Soft);
        assert_eq!(e.to_string(), "ocrmypdf not installed. Skipping OCR.");
    }

    #[test]
    fn ocr_failed_display_with_code() {
        let e = PdfToolError::OcrFailed {
            tool: "ocrmypdf".into(),
            code: Some(6),
            stderr: "page already has text".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("status 6"), "got: {msg}");
        assert!(msg.contains("page already has text"));
    }

    #[test]
    fn ocr_failed_display_without_code() {
        let e = PdfToolError::OcrFailed {
            tool: "ocrmypdf".into(),
            code: None,
            stderr: String::new(),
        };
        assert!(e.to_string().contains("a signal"));
    }

    #[test]
    fn binding_failure_is_fatal_and_markdown_unavailable_is_soft() {
        assert!(PdfToolError::PdfiumBindingFailed("no lib".into()).is_fatal());
        assert!(!PdfToolError::MarkdownUnavailable.is_fatal());
    }
}
