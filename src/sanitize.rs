//! PDF filename sanitising.
//!
//! Renames every `*.pdf` under a root directory to an ASCII-safe,
//! underscore-delimited name:
//!
//! ```text
//! "Über Report (final).pdf"  →  "Uber_Report_final.pdf"
//! ```
//!
//! The stem transformation is idempotent, so a second run over the same tree
//! renames nothing. Two names that sanitise to the same result are not
//! detected; the later rename replaces the earlier file.

use crate::config::SanitizeConfig;
use crate::error::PdfToolError;
use crate::output::{RenameDecision, SanitizeReport};
use crate::progress::SanitizeObserver;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;
use walkdir::WalkDir;

/// Extension (without dot) of files the sanitiser touches.
pub const PDF_EXTENSION: &str = "pdf";

/// Characters allowed in a sanitised stem besides ASCII alphanumerics.
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Sanitise a file stem.
///
/// NFKD-decompose, drop non-ASCII, replace each run of disallowed characters
/// with one `_`, strip `_` from both ends, truncate to `max_len` characters,
/// then strip trailing `_` again so the result is a fixed point.
pub fn sanitize_stem(stem: &str, max_len: usize) -> String {
    let ascii: String = stem.nfkd().filter(char::is_ascii).collect();

    let mut replaced = String::with_capacity(ascii.len());
    let mut in_run = false;
    for c in ascii.chars() {
        if is_allowed(c) {
            replaced.push(c);
            in_run = false;
        } else if !in_run {
            replaced.push('_');
            in_run = true;
        }
    }

    let stripped = replaced.trim_matches('_');
    // ASCII only from here on, so byte and char lengths agree.
    let truncated = &stripped[..stripped.len().min(max_len)];
    truncated.trim_end_matches('_').to_string()
}

/// Sanitised `<stem>.pdf` for a file name, or `None` when nothing of the
/// stem survives.
pub fn sanitize_file_name(file_name: &str, max_len: usize) -> Option<String> {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let safe = sanitize_stem(&stem, max_len);
    if safe.is_empty() {
        None
    } else {
        Some(format!("{safe}.{PDF_EXTENSION}"))
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PDF_EXTENSION)
}

/// Collect every PDF under `root`, sorted by path within each directory.
///
/// The walk finishes before anything is renamed.
pub fn find_pdfs(root: &Path) -> (Vec<PathBuf>, Vec<PdfToolError>) {
    let mut pdfs = Vec::new();
    let mut errors = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(e) if e.file_type().is_file() && is_pdf(e.path()) => pdfs.push(e.into_path()),
            Ok(_) => {}
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                errors.push(PdfToolError::Walk(e));
            }
        }
    }
    debug!("Found {} PDFs under {}", pdfs.len(), root.display());
    (pdfs, errors)
}

/// What to do with one path: `Ok(Some)` rename, `Ok(None)` leave alone,
/// `Err(())` sanitised stem is empty.
fn decide(path: &Path, max_len: usize) -> Result<Option<RenameDecision>, ()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let new_name = sanitize_file_name(&name, max_len).ok_or(())?;
    if new_name == name {
        return Ok(None);
    }
    Ok(Some(RenameDecision {
        from: path.to_path_buf(),
        to: path.with_file_name(new_name),
    }))
}

/// Sanitise every PDF filename under `root`.
///
/// Per-file rename failures are collected in the report and the walk
/// continues.
pub fn sanitize_tree(
    root: &Path,
    config: &SanitizeConfig,
    observer: &dyn SanitizeObserver,
) -> Result<SanitizeReport, PdfToolError> {
    config.validate()?;
    let (pdfs, walk_errors) = find_pdfs(root);
    let mut report = SanitizeReport {
        errors: walk_errors,
        ..Default::default()
    };

    for path in pdfs {
        let decision = match decide(&path, config.max_stem_len) {
            Ok(Some(d)) => d,
            Ok(None) => continue,
            Err(()) => {
                warn!("No safe name for {}; leaving it", path.display());
                observer.on_skip_empty(&path);
                report.skipped_empty.push(path);
                continue;
            }
        };

        if !config.dry_run {
            if let Err(source) = std::fs::rename(&decision.from, &decision.to) {
                let err = PdfToolError::RenameFailed {
                    from: decision.from.clone(),
                    to: decision.to.clone(),
                    source,
                };
                warn!("{}", err);
                observer.on_error(&err);
                report.errors.push(err);
                continue;
            }
        }

        debug!(
            "{} {} -> {}",
            if config.dry_run { "Would rename" } else { "Renamed" },
            decision.from.display(),
            decision.to.display()
        );
        observer.on_rename(&decision, config.dry_run);
        report.renamed.push(decision);
    }

    info!("Total files renamed: {}", report.renamed_count());
    Ok(report)
}
