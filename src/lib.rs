//! # pdftriage
//!
//! Three small pipelines for preparing PDF collections for search and
//! retrieval:
//!
//! | Binary | Module | What it does |
//! |--------|--------|--------------|
//! | `extract-text-or-ocr` | [`extract`]  | `<stem>.txt`, running OCR first when the PDF has no text layer |
//! | `pdf-to-md-jsonl`     | [`convert`]  | `<stem>.md` and a page-indexed `<stem>.jsonl` |
//! | `sanitize-filenames`  | [`sanitize`] | rename PDFs under a tree to `[A-Za-z0-9._-]` names |
//!
//! The tools share no state; compose them externally, e.g. sanitise a
//! directory and then run the extractor over each file.
//!
//! ## Failure model
//!
//! Every operation returns [`PdfToolError`], classified by
//! [`PdfToolError::severity`]. Only a missing input and an unbindable pdfium
//! library are fatal; everything else (missing `ocrmypdf`, a renderer
//! failure, an unreadable page) is reported and the run exits 0.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdftriage::{extract_or_ocr, ExtractConfig, NoopObserver, PdfEngine};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractConfig::default();
//!     let engine = PdfEngine::bind(None)?;
//!     let report = extract_or_ocr(&engine, Path::new("scan.pdf"), &config, &NoopObserver);
//!     println!("{:?} → {}", report.route, report.txt_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `cli`      | on      | The three binaries (clap + anyhow + tracing-subscriber + indicatif) |
//! | `markdown` | on      | Markdown rendering through pdf-extract |

// ── Modules ──────────────────────────────────────────────────────────────

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod sanitize;
pub mod status;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractConfig, ExtractConfigBuilder, MarkdownConfig, OcrConfig, PageSeparator, SanitizeConfig};
pub use convert::convert;
pub use error::{PdfToolError, Severity};
pub use extract::{extract_or_ocr, extract_or_ocr_with};
pub use output::{ConversionReport, DocumentMetadata, ExtractionReport, RenameDecision, Route, SanitizeReport};
pub use pipeline::jsonl::PageRecord;
pub use pipeline::ocr::OcrTool;
pub use pipeline::pdf::PdfEngine;
pub use progress::{ExtractionObserver, NoopObserver, SanitizeObserver};
pub use sanitize::{sanitize_file_name, sanitize_stem, sanitize_tree};
pub use status::{Reporter, Status};
