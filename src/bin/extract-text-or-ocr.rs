//! CLI binary: extract a PDF's text, running OCR first when it has no text
//! layer.
//!
//! A thin shim over [`pdftriage::extract_or_ocr`] that maps flags to
//! `ExtractConfig` and turns the report into status lines.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use pdftriage::cli::{init_logging, parse_args, spinner};
use pdftriage::pipeline::input::resolve_pdf;
use pdftriage::{
    extract_or_ocr, ExtractConfig, ExtractionObserver, ExtractionReport, PdfEngine, PdfToolError,
    Reporter, Route,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract report.txt (OCR only if report.pdf has no text layer)
  extract-text-or-ocr report.pdf

  # German scans, two OCR workers
  extract-text-or-ocr --ocr-lang deu --ocr-jobs 2 scan.pdf

OUTPUT:
  <stem>.txt       page text, each page preceded by a PAGE <n> banner
  <stem>.ocr.pdf   searchable copy, only when OCR ran

EXIT STATUS:
  1  input file missing or pdfium library unavailable
  0  otherwise, including when OCR is unavailable or fails

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to libpdfium (file or directory)
  RUST_LOG          Override log filter (logs go to stderr)
"#;

/// Extract text from a PDF, with OCR fallback for image-only documents.
#[derive(Parser, Debug)]
#[command(
    name = "extract-text-or-ocr",
    version,
    about = "Extract text from a PDF, with OCR fallback for image-only documents",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF file to extract.
    input: PathBuf,

    /// A page counts as text when its trimmed text is longer than this.
    #[arg(long, env = "PDFTRIAGE_MIN_CHARS", default_value_t = pdftriage::config::DEFAULT_MIN_TEXT_CHARS)]
    min_chars: usize,

    /// OCR binary name or path.
    #[arg(long, env = "PDFTRIAGE_OCR_BIN", default_value = "ocrmypdf")]
    ocr_bin: String,

    /// Parallel OCR jobs (passed to the tool as --jobs).
    #[arg(long, env = "PDFTRIAGE_OCR_JOBS", default_value_t = 4)]
    ocr_jobs: usize,

    /// OCR optimisation level 0–3 (passed as --optimize).
    #[arg(long, env = "PDFTRIAGE_OCR_OPTIMIZE", default_value_t = 3)]
    ocr_optimize: u8,

    /// OCR language(s), repeatable or `+`-joined (e.g. eng+deu).
    #[arg(long = "ocr-lang", env = "PDFTRIAGE_OCR_LANG", value_delimiter = '+')]
    ocr_lang: Vec<String>,

    /// Path to libpdfium (file, or directory containing it).
    #[arg(long, env = "PDFIUM_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFTRIAGE_VERBOSE")]
    verbose: bool,

    /// Suppress status lines; only errors are printed.
    #[arg(short, long, env = "PDFTRIAGE_QUIET")]
    quiet: bool,
}

/// Prints each stage as it starts and shows a spinner while OCR runs.
struct CliObserver {
    reporter: Reporter,
    quiet: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl CliObserver {
    fn stop_spinner(&self) {
        if let Some(bar) = self.spinner.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl ExtractionObserver for CliObserver {
    fn on_document_start(&self, pdf: &Path) {
        self.reporter.header(&format!("Processing: {}", file_name(pdf)));
    }

    fn on_text_check_failed(&self, error: &PdfToolError) {
        self.reporter.failure(&format!("Error checking text: {error}"));
    }

    fn on_direct_extraction(&self, _pdf: &Path) {
        self.reporter.step("Extracting text directly...");
    }

    fn on_ocr_start(&self, _input: &Path, output: &Path) {
        self.reporter.step("No text found, attempting OCR...");
        let bar = spinner("OCR", &file_name(output), self.quiet);
        *self.spinner.borrow_mut() = Some(bar);
    }

    fn on_ocr_complete(&self, _output: &Path) {
        self.stop_spinner();
        self.reporter.step("Extracting text from OCR'd PDF...");
    }

    fn on_ocr_failed(&self, error: &PdfToolError) {
        self.stop_spinner();
        match error {
            PdfToolError::OcrToolMissing { .. } => self.reporter.warning(&error.to_string()),
            other => self.reporter.failure(&format!("OCR failed: {other}")),
        }
        self.reporter
            .failure("OCR failed, trying basic extraction anyway...");
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn report_outcome(reporter: &Reporter, report: &ExtractionReport) {
    let txt = report.txt_path.display();
    match (report.route, &report.extraction) {
        (Route::Direct, Ok(_)) => reporter.success(&format!("Text extracted: {txt}")),
        (Route::Direct, Err(e)) => reporter.failure(&format!("Text extraction failed: {e}")),
        (Route::Ocr, Ok(_)) => reporter.success(&format!("OCR + text extracted: {txt}")),
        (Route::Ocr, Err(e)) => {
            reporter.failure(&format!("Text extraction from OCR failed: {e}"))
        }
        (Route::Fallback, result) => {
            if let Err(e) = result {
                reporter.failure(&format!("Text extraction failed: {e}"));
            }
            reporter.warning(&format!("Partial extraction: {txt}"));
        }
    }
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();
    init_logging(cli.verbose);

    // ── Fatal checks ─────────────────────────────────────────────────────
    let pdf = resolve_pdf(&cli.input)?;

    let mut builder = ExtractConfig::builder()
        .min_text_chars(cli.min_chars)
        .ocr_binary(cli.ocr_bin.clone())
        .ocr_jobs(cli.ocr_jobs)
        .ocr_optimize(cli.ocr_optimize)
        .ocr_languages(cli.ocr_lang.iter().filter(|l| !l.is_empty()).cloned());
    if let Some(ref lib) = cli.pdfium_lib {
        builder = builder.pdfium_lib_path(lib.clone());
    }
    let config = builder.build().context("Invalid configuration")?;

    let engine = PdfEngine::bind(config.pdfium_lib_path.as_deref())?;

    // ── Extraction (soft failures only from here) ────────────────────────
    let reporter = Reporter::stdout(cli.quiet);
    let observer = CliObserver {
        reporter,
        quiet: cli.quiet,
        spinner: RefCell::new(None),
    };

    let report = extract_or_ocr(&engine, &pdf, &config, &observer);
    observer.stop_spinner();
    report_outcome(&reporter, &report);

    Ok(())
}
