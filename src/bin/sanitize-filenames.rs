//! CLI binary: rename every PDF under a directory to a filesystem-safe name.

use anyhow::Result;
use clap::Parser;
use pdftriage::cli::{init_logging, parse_args};
use pdftriage::pipeline::input::resolve_dir;
use pdftriage::{sanitize_tree, PdfToolError, RenameDecision, Reporter, SanitizeConfig, SanitizeObserver};
use std::path::{Path, PathBuf};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Rename in place
  sanitize-filenames ~/papers

  # Show what would change
  sanitize-filenames --dry-run ~/papers

RULES:
  Accents are decomposed and non-ASCII characters dropped. Each run of
  characters outside [A-Za-z0-9._-] becomes one underscore; leading and
  trailing underscores are stripped; stems are cut to --max-len.
  Files whose name would become empty are left alone.

  Two files that sanitise to the same name are not detected; the later
  rename replaces the earlier file.
"#;

/// Rename PDFs under a directory to filesystem-safe names.
#[derive(Parser, Debug)]
#[command(
    name = "sanitize-filenames",
    version,
    about = "Rename PDFs under a directory to filesystem-safe names",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Root directory to walk recursively.
    root: PathBuf,

    /// Print planned renames without touching the filesystem.
    #[arg(short = 'n', long, env = "PDFTRIAGE_DRY_RUN")]
    dry_run: bool,

    /// Maximum stem length in characters.
    #[arg(long, env = "PDFTRIAGE_MAX_LEN", default_value_t = pdftriage::config::DEFAULT_MAX_STEM_LEN)]
    max_len: usize,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFTRIAGE_VERBOSE")]
    verbose: bool,

    /// Suppress per-file lines; only the total is printed.
    #[arg(short, long, env = "PDFTRIAGE_QUIET")]
    quiet: bool,
}

struct CliObserver {
    reporter: Reporter,
    quiet: bool,
}

impl SanitizeObserver for CliObserver {
    fn on_rename(&self, decision: &RenameDecision, dry_run: bool) {
        if self.quiet {
            return;
        }
        let verb = if dry_run { "Would rename" } else { "Renamed" };
        println!(
            "{verb}: {} -> {}",
            file_name(&decision.from),
            file_name(&decision.to)
        );
    }

    fn on_skip_empty(&self, path: &Path) {
        self.reporter
            .warning(&format!("No safe name for {}; left unchanged", path.display()));
    }

    fn on_error(&self, error: &PdfToolError) {
        self.reporter.failure(&error.to_string());
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();
    init_logging(cli.verbose);

    let root = resolve_dir(&cli.root)?;
    let config = SanitizeConfig {
        max_stem_len: cli.max_len,
        dry_run: cli.dry_run,
    };

    let observer = CliObserver {
        reporter: Reporter::stdout(cli.quiet),
        quiet: cli.quiet,
    };
    let report = sanitize_tree(&root, &config, &observer)?;

    println!("\nTotal files renamed: {}", report.renamed_count());
    Ok(())
}
