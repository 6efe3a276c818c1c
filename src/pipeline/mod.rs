//! Pipeline stages shared by the three tools.
//!
//! Each submodule implements exactly one step; the top-level
//! [`crate::extract`], [`crate::convert`] and [`crate::sanitize`] modules
//! chain them.
//!
//! ## Data Flow
//!
//! ```text
//! extractor:  input ──▶ text::has_text ──┬──▶ text::extract_text
//!                                        └──▶ ocr ──▶ text::extract_text
//! converter:  input ──▶ markdown ──▶ postprocess ──▶ write
//!                  └──▶ jsonl ──────────────────────▶ write
//! ```
//!
//! 1. [`input`]       — validate the user-supplied path
//! 2. [`pdf`]         — bind pdfium and visit page text layers
//! 3. [`text`]        — text-layer detection and banner-framed `.txt` export
//! 4. [`ocr`]         — run `ocrmypdf` as a subprocess
//! 5. [`markdown`]    — optional pdf-extract renderer
//! 6. [`postprocess`] — deterministic Markdown cleanup rules
//! 7. [`jsonl`]       — page records, one JSON object per line
//! 8. [`write`]       — atomic temp-file-then-rename output

pub mod input;
pub mod jsonl;
pub mod markdown;
pub mod ocr;
pub mod pdf;
pub mod postprocess;
pub mod text;
pub mod write;
