//! Text-layer access through pdfium.
//!
//! [`PdfEngine`] owns the bound pdfium library. Binding happens once per
//! invocation; a failure there is fatal because every pipeline that reads a
//! text layer depends on it. Opening or reading a particular document is a
//! soft failure scoped to that document.
//!
//! Pages are visited one at a time through a callback so that callers can
//! stream output (JSONL, banners) or stop early (text detection) without
//! holding every page's text in memory.

use crate::error::PdfToolError;
use crate::output::DocumentMetadata;
use pdfium_render::prelude::*;
use std::ops::ControlFlow;
use std::path::Path;
use tracing::{debug, info};

/// A bound pdfium library.
pub struct PdfEngine {
    pdfium: Pdfium,
}

impl std::fmt::Debug for PdfEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfEngine").finish_non_exhaustive()
    }
}

impl PdfEngine {
    /// Bind pdfium.
    ///
    /// Search order:
    /// 1. `explicit` (CLI flag or `PDFIUM_LIB_PATH`), used alone when given
    /// 2. the platform library name in the current directory
    /// 3. system library paths
    pub fn bind(explicit: Option<&Path>) -> Result<Self, PdfToolError> {
        let bindings = match explicit {
            Some(path) => {
                let lib = if path.is_dir() {
                    Pdfium::pdfium_platform_library_name_at_path(path)
                } else {
                    path.to_path_buf()
                };
                debug!("Binding pdfium from {}", lib.display());
                Pdfium::bind_to_library(&lib).map_err(|e| {
                    PdfToolError::PdfiumBindingFailed(format!("{}: {:?}", lib.display(), e))
                })?
            }
            None => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|e| PdfToolError::PdfiumBindingFailed(format!("{:?}", e)))?,
        };

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Visit each page's plain text in order, 1-indexed.
    ///
    /// The visitor may stop early with `ControlFlow::Break`. Returns the
    /// number of pages visited.
    pub fn visit_pages<F>(&self, pdf_path: &Path, mut visit: F) -> Result<usize, PdfToolError>
    where
        F: FnMut(usize, String) -> Result<ControlFlow<()>, PdfToolError>,
    {
        let document = self.open(pdf_path)?;
        let pages = document.pages();
        debug!("PDF loaded: {} pages", pages.len());

        let mut visited = 0;
        for (idx, page) in pages.iter().enumerate() {
            let page_num = idx + 1;
            let text = page
                .text()
                .map_err(|e| PdfToolError::PageText {
                    page: page_num,
                    detail: format!("{:?}", e),
                })?
                .all();
            visited = page_num;
            if visit(page_num, text)?.is_break() {
                break;
            }
        }

        Ok(visited)
    }

    /// Collect every page's text. Convenience for small documents and tests.
    pub fn page_texts(&self, pdf_path: &Path) -> Result<Vec<String>, PdfToolError> {
        let mut out = Vec::new();
        self.visit_pages(pdf_path, |_, text| {
            out.push(text);
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(out)
    }

    /// Extract document metadata without reading page text.
    pub fn metadata(&self, pdf_path: &Path) -> Result<DocumentMetadata, PdfToolError> {
        let document = self.open(pdf_path)?;
        let metadata = document.metadata();

        let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
            metadata.get(tag).and_then(|t| {
                let v = t.value().trim().to_string();
                if v.is_empty() {
                    None
                } else {
                    Some(v)
                }
            })
        };

        Ok(DocumentMetadata {
            title: get_meta(PdfDocumentMetadataTagType::Title),
            author: get_meta(PdfDocumentMetadataTagType::Author),
            subject: get_meta(PdfDocumentMetadataTagType::Subject),
            creator: get_meta(PdfDocumentMetadataTagType::Creator),
            producer: get_meta(PdfDocumentMetadataTagType::Producer),
            page_count: document.pages().len() as usize,
            pdf_version: format!("{:?}", document.version()),
        })
    }

    fn open(&self, pdf_path: &Path) -> Result<PdfDocument<'_>, PdfToolError> {
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| PdfToolError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: format!("{:?}", e),
            })?;
        info!("Opened {}", pdf_path.display());
        Ok(document)
    }
}
