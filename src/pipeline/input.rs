//! Input resolution: validate the user-supplied path before any work starts.
//!
//! A missing input is one of the two fatal cases, so it is checked up front
//! and reported as [`PdfToolError::FileNotFound`] /
//! [`PdfToolError::NotADirectory`] rather than surfacing later as a soft
//! per-document failure.

use crate::error::PdfToolError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a local PDF path, validating existence and readability.
pub fn resolve_pdf(path: impl AsRef<Path>) -> Result<PathBuf, PdfToolError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
        return Err(PdfToolError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(PdfToolError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(PdfToolError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

/// Resolve the sanitiser root directory.
pub fn resolve_dir(path: impl AsRef<Path>) -> Result<PathBuf, PdfToolError> {
    let path = path.as_ref().to_path_buf();
    if !path.is_dir() {
        return Err(PdfToolError::NotADirectory { path });
    }
    debug!("Resolved root directory: {}", path.display());
    Ok(path)
}

/// `<dir>/<stem>.<ext>` next to the input, e.g. `report.pdf` → `report.txt`.
pub fn sibling_with_extension(pdf: &Path, ext: &str) -> PathBuf {
    pdf.with_extension(ext)
}

/// Intermediate OCR output: `report.pdf` → `report.ocr.pdf`.
pub fn ocr_output_path(pdf: &Path) -> PathBuf {
    pdf.with_extension("ocr.pdf")
}
