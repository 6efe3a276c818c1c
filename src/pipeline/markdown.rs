//! Markdown rendering through [`pdf_extract`].
//!
//! The renderer is an optional dependency behind the `markdown` feature.
//! Without it [`render_markdown`] returns
//! [`PdfToolError::MarkdownUnavailable`] and the converter skips the `.md`
//! output with a warning instead of failing the whole run.
//!
//! `pdf_extract` yields plain text per page. The resulting document is that
//! text, cleaned up, with bullet glyphs turned into `- ` items and pages
//! split by the configured separator. No headings are inferred.
//!
//! `pdf_extract` can panic on malformed input rather than returning an error,
//! so the call is wrapped in [`std::panic::catch_unwind`].

use crate::config::MarkdownConfig;
use crate::error::PdfToolError;
use crate::output::DocumentMetadata;
use crate::pipeline::postprocess;
use std::path::Path;

/// True when this build carries the Markdown renderer.
pub const fn is_available() -> bool {
    cfg!(feature = "markdown")
}

/// Render `pdf_path` as Markdown.
///
/// `metadata` is only used when `config.include_metadata` is set.
pub fn render_markdown(
    pdf_path: &Path,
    config: &MarkdownConfig,
    metadata: Option<&DocumentMetadata>,
) -> Result<String, PdfToolError> {
    let pages = extract_pages(pdf_path)?;
    let front_matter = if config.include_metadata {
        metadata
    } else {
        None
    };
    Ok(assemble_document(&pages, config, front_matter))
}

#[cfg(feature = "markdown")]
fn extract_pages(pdf_path: &Path) -> Result<Vec<String>, PdfToolError> {
    use std::panic::{self, AssertUnwindSafe};
    use tracing::debug;

    let data = std::fs::read(pdf_path)
        .map_err(|e| PdfToolError::MarkdownFailed(format!("{}: {e}", pdf_path.display())))?;

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&data)
    }));
    match result {
        Ok(Ok(pages)) => {
            debug!("pdf-extract returned {} pages", pages.len());
            Ok(pages)
        }
        Ok(Err(e)) => Err(PdfToolError::MarkdownFailed(e.to_string())),
        Err(_) => Err(PdfToolError::MarkdownFailed(
            "renderer panicked (malformed document)".into(),
        )),
    }
}

#[cfg(not(feature = "markdown"))]
fn extract_pages(_pdf_path: &Path) -> Result<Vec<String>, PdfToolError> {
    Err(PdfToolError::MarkdownUnavailable)
}

/// Assemble cleaned pages into one Markdown document.
///
/// Empty pages are dropped; the separator before each remaining page is
/// rendered with that page's real (1-indexed) number.
pub fn assemble_document(
    pages: &[String],
    config: &MarkdownConfig,
    metadata: Option<&DocumentMetadata>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(meta) = metadata {
        parts.push(format_yaml_front_matter(meta));
    }

    let nonempty = pages
        .iter()
        .enumerate()
        .map(|(i, raw)| (i + 1, postprocess::clean_page(raw)))
        .filter(|(_, text)| !text.is_empty());

    for (i, (page_num, text)) in nonempty.enumerate() {
        if i > 0 {
            parts.push(config.page_separator.render(page_num));
        }
        parts.push(text.trim_end_matches('\n').to_string());
    }

    postprocess::clean_markdown(&parts.join(""))
}

/// Format document metadata as YAML front matter.
///
/// String values are emitted as JSON strings, which are valid YAML
/// double-quoted scalars with correct escaping.
fn format_yaml_front_matter(meta: &DocumentMetadata) -> String {
    let quote = |s: &str| serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
    let mut yaml = String::from("---\n");

    let fields = [
        ("title", &meta.title),
        ("author", &meta.author),
        ("subject", &meta.subject),
        ("creator", &meta.creator),
        ("producer", &meta.producer),
    ];
    for (key, value) in fields {
        if let Some(v) = value {
            yaml.push_str(&format!("{key}: {}\n", quote(v.as_str())));
        }
    }
    yaml.push_str(&format!("pages: {}\n", meta.page_count));
    if !meta.pdf_version.is_empty() {
        yaml.push_str(&format!("pdf_version: {}\n", quote(meta.pdf_version.as_str())));
    }

    yaml.push_str("---\n\n");
    yaml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageSeparator;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pages_joined_with_horizontal_rule_by_default() {
        let md = assemble_document(&pages(&["One", "Two"]), &MarkdownConfig::default(), None);
        assert_eq!(md, "One\n\n---\n\nTwo\n");
    }

    #[test]
    fn empty_pages_are_dropped_and_numbering_kept() {
        let config = MarkdownConfig {
            page_separator: PageSeparator::Comment,
            ..Default::default()
        };
        let md = assemble_document(&pages(&["One", "  \n ", "Three"]), &config, None);
        assert_eq!(md, "One\n\n<!-- page 3 -->\n\nThree\n");
    }

    #[test]
    fn hash_prefixed_line_is_not_treated_as_heading() {
        let md = assemble_document(
            &pages(&["Total\n# of units sold: 5\nend"]),
            &MarkdownConfig::default(),
            None,
        );
        assert_eq!(md, "Total\n# of units sold: 5\nend\n");
    }

    #[test]
    fn all_empty_document_is_single_newline() {
        let md = assemble_document(&pages(&["", "\n\n"]), &MarkdownConfig::default(), None);
        assert_eq!(md, "\n");
    }

    #[test]
    fn front_matter_escapes_quotes() {
        let meta = DocumentMetadata {
            title: Some("The \"Best\" Report".into()),
            author: Some("Jörg".into()),
            page_count: 2,
            pdf_version: "Pdf1_7".into(),
            ..Default::default()
        };
        let md = assemble_document(&pages(&["Body"]), &MarkdownConfig::default(), Some(&meta));
        assert!(md.starts_with("---\ntitle: \"The \\\"Best\\\" Report\"\nauthor: \"Jörg\"\npages: 2\n"));
        assert!(md.contains("pdf_version: \"Pdf1_7\"\n---\n\nBody\n"));
    }

    #[cfg(not(feature = "markdown"))]
    #[test]
    fn unavailable_without_feature() {
        assert!(!is_available());
        let err = render_markdown(Path::new("x.pdf"), &MarkdownConfig::default(), None).unwrap_err();
        assert!(matches!(err, PdfToolError::MarkdownUnavailable));
    }

    #[cfg(feature = "markdown")]
    #[test]
    fn garbage_input_is_markdown_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();
        let err = render_markdown(&path, &MarkdownConfig::default(), None).unwrap_err();
        assert!(matches!(err, PdfToolError::MarkdownFailed(_)));
    }
}
