//! Markdown + JSONL conversion.
//!
//! Writes `<stem>.md` and `<stem>.jsonl` next to the input. The two steps are
//! attempted independently and reported independently: a missing Markdown
//! renderer or a renderer failure never prevents the JSONL output, and vice
//! versa.

use crate::config::MarkdownConfig;
use crate::error::PdfToolError;
use crate::output::ConversionReport;
use crate::pipeline::input::sibling_with_extension;
use crate::pipeline::jsonl::write_jsonl;
use crate::pipeline::markdown::{self, render_markdown};
use crate::pipeline::pdf::PdfEngine;
use crate::pipeline::write::write_string_atomic;
use std::path::Path;
use tracing::{info, warn};

/// Convert one PDF to Markdown and JSONL.
pub fn convert(engine: &PdfEngine, pdf: &Path, config: &MarkdownConfig) -> ConversionReport {
    let markdown_path = sibling_with_extension(pdf, "md");
    let jsonl_path = sibling_with_extension(pdf, "jsonl");

    let markdown = convert_markdown(engine, pdf, &markdown_path, config);
    match &markdown {
        Ok(()) => info!("Markdown written: {}", markdown_path.display()),
        Err(e) => warn!("Markdown step: {}", e),
    }

    let jsonl = write_jsonl(engine, pdf, &jsonl_path);
    match &jsonl {
        Ok(n) => info!("JSONL written: {} ({} records)", jsonl_path.display(), n),
        Err(e) => warn!("JSONL step: {}", e),
    }

    ConversionReport {
        markdown_path,
        markdown,
        jsonl_path,
        jsonl,
    }
}

fn convert_markdown(
    engine: &PdfEngine,
    pdf: &Path,
    markdown_path: &Path,
    config: &MarkdownConfig,
) -> Result<(), PdfToolError> {
    if !markdown::is_available() {
        return Err(PdfToolError::MarkdownUnavailable);
    }

    // Missing metadata only costs the front matter, not the document.
    let metadata = if config.include_metadata {
        engine
            .metadata(pdf)
            .map_err(|e| warn!("Metadata unavailable: {}", e))
            .ok()
    } else {
        None
    };

    let md = render_markdown(pdf, config, metadata.as_ref())?;
    write_string_atomic(markdown_path, &md)
}
