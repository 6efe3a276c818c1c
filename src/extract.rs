//! Text-or-OCR extraction.
//!
//! Decides per document whether the existing text layer is enough or OCR is
//! needed, then writes `<stem>.txt` next to the input:
//!
//! ```text
//! has_text? ──yes──▶ extract original                      (Route::Direct)
//!     │
//!     no ──▶ ocrmypdf ──ok──▶ extract <stem>.ocr.pdf       (Route::Ocr)
//!                 │
//!                 failed ──▶ extract original anyway       (Route::Fallback)
//! ```
//!
//! Only the fatal cases (missing input, pdfium not bindable) are checked by
//! the caller before this runs; everything here ends in an
//! [`ExtractionReport`].

use crate::config::ExtractConfig;
use crate::error::PdfToolError;
use crate::output::{ExtractionReport, Route};
use crate::pipeline::input::{ocr_output_path, sibling_with_extension};
use crate::pipeline::ocr::OcrTool;
use crate::pipeline::pdf::PdfEngine;
use crate::pipeline::text::{extract_text, has_text};
use crate::progress::ExtractionObserver;
use std::path::Path;
use tracing::{info, warn};

/// Run the decision procedure with the OCR tool looked up on `PATH`.
pub fn extract_or_ocr(
    engine: &PdfEngine,
    pdf: &Path,
    config: &ExtractConfig,
    observer: &dyn ExtractionObserver,
) -> ExtractionReport {
    extract_or_ocr_with(engine, pdf, config.min_text_chars, observer, || {
        OcrTool::locate(&config.ocr)
    })
}

/// Run the decision procedure with a caller-supplied OCR lookup.
///
/// `locate_ocr` is only called when the document has no text layer.
pub fn extract_or_ocr_with<L>(
    engine: &PdfEngine,
    pdf: &Path,
    min_text_chars: usize,
    observer: &dyn ExtractionObserver,
    locate_ocr: L,
) -> ExtractionReport
where
    L: FnOnce() -> Result<OcrTool, PdfToolError>,
{
    let txt_path = sibling_with_extension(pdf, "txt");
    observer.on_document_start(pdf);

    let text_layer = match has_text(engine, pdf, min_text_chars) {
        Ok(found) => found,
        Err(e) => {
            warn!("Error checking text in {}: {}", pdf.display(), e);
            observer.on_text_check_failed(&e);
            false
        }
    };

    if text_layer {
        info!("Text layer found in {}", pdf.display());
        observer.on_direct_extraction(pdf);
        let extraction = extract_text(engine, pdf, &txt_path);
        return ExtractionReport {
            route: Route::Direct,
            txt_path,
            ocr_pdf: None,
            ocr_error: None,
            extraction,
        };
    }

    info!("No text layer in {}; attempting OCR", pdf.display());
    let ocr_out = ocr_output_path(pdf);
    observer.on_ocr_start(pdf, &ocr_out);

    match locate_ocr().and_then(|tool| tool.run(pdf, &ocr_out)) {
        Ok(()) => {
            observer.on_ocr_complete(&ocr_out);
            let extraction = extract_text(engine, &ocr_out, &txt_path);
            ExtractionReport {
                route: Route::Ocr,
                txt_path,
                ocr_pdf: Some(ocr_out),
                ocr_error: None,
                extraction,
            }
        }
        Err(e) => {
            warn!("OCR failed for {}: {}", pdf.display(), e);
            observer.on_ocr_failed(&e);
            let extraction = extract_text(engine, pdf, &txt_path);
            ExtractionReport {
                route: Route::Fallback,
                txt_path,
                ocr_pdf: None,
                ocr_error: Some(e),
                extraction,
            }
        }
    }
}
