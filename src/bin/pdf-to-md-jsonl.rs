//! CLI binary: convert a PDF to Markdown and page-indexed JSONL.

use anyhow::Result;
use clap::Parser;
use pdftriage::cli::{init_logging, parse_args};
use pdftriage::pipeline::input::resolve_pdf;
use pdftriage::{convert, ConversionReport, MarkdownConfig, PageSeparator, PdfEngine, PdfToolError, Reporter};
use std::path::PathBuf;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Write paper.md and paper.jsonl next to paper.pdf
  pdf-to-md-jsonl paper.pdf

  # No page separators, YAML front matter from PDF metadata
  pdf-to-md-jsonl --separator none --metadata paper.pdf

OUTPUT:
  <stem>.md      Markdown rendering of the whole document
  <stem>.jsonl   one {"doc_id","page","text"} object per page

  Each output is attempted independently; one failing never blocks
  the other.

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to libpdfium (file or directory)
  RUST_LOG          Override log filter (logs go to stderr)
"#;

/// Convert a PDF to Markdown and JSONL.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-to-md-jsonl",
    version,
    about = "Convert a PDF to Markdown and page-indexed JSONL",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF file to convert.
    input: PathBuf,

    /// Markdown page separator: none, hr, comment, or any custom string.
    /// `{page}` in a custom string is replaced with the page number.
    #[arg(long, env = "PDFTRIAGE_SEPARATOR", default_value = "hr")]
    separator: String,

    /// Prepend YAML front matter built from PDF metadata.
    #[arg(long, env = "PDFTRIAGE_METADATA")]
    metadata: bool,

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

fn report_outcome(reporter: &Reporter, report: &ConversionReport) {
    match &report.markdown {
        Ok(()) => reporter.success(&format!("Markdown: {}", report.markdown_path.display())),
        Err(PdfToolError::MarkdownUnavailable) => {
            reporter.warning("Skipping Markdown conversion (renderer not built in)")
        }
        Err(e) => reporter.failure(&format!("Markdown conversion failed: {e}")),
    }

    match &report.jsonl {
        Ok(_) => reporter.success(&format!("JSONL: {}", report.jsonl_path.display())),
        Err(e) => reporter.failure(&format!("JSONL conversion failed: {e}")),
    }
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();
    init_logging(cli.verbose);

    let pdf = resolve_pdf(&cli.input)?;
    let engine = PdfEngine::bind(cli.pdfium_lib.as_deref())?;

    let config = MarkdownConfig {
        page_separator: PageSeparator::parse(&cli.separator),
        include_metadata: cli.metadata,
    };

    let reporter = Reporter::stdout(cli.quiet);
    let name = pdf
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| pdf.display().to_string());
    reporter.header(&format!("Converting: {name}"));

    let report = convert(&engine, &pdf, &config);
    report_outcome(&reporter, &report);

    Ok(())
}
