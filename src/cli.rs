//! Helpers shared by the three binaries (feature `cli`).

use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

/// Parse the command line, exiting on error.
///
/// `--help` and `--version` exit 0. Every usage error, including a missing
/// path argument, prints the usage text and exits 1.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = usage_exit_code(&e);
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Exit status for a failed parse.
pub fn usage_exit_code(error: &clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Install the stderr tracing subscriber.
///
/// Status lines on stdout already say what happened, so library logs are
/// limited to errors unless `--verbose` is given. `RUST_LOG` overrides both.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Spinner on stderr for a long-running step. Hidden when `quiet` or when
/// stderr is not a terminal.
pub fn spinner(prefix: &str, message: &str, quiet: bool) -> ProgressBar {
    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  ⏱ {elapsed}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS);
    bar.set_style(style);
    bar.set_prefix(prefix.to_string());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(name = "tool", version, arg_required_else_help = true)]
    struct Args {
        path: PathBuf,
        #[arg(long)]
        dry_run: bool,
    }

    fn code(args: &[&str]) -> i32 {
        usage_exit_code(&Args::try_parse_from(args).unwrap_err())
    }

    #[test]
    fn missing_path_exits_one() {
        assert_eq!(code(&["tool"]), 1);
    }

    #[test]
    fn unknown_flag_exits_one() {
        assert_eq!(code(&["tool", "dir", "--bogus"]), 1);
    }

    #[test]
    fn help_and_version_exit_zero() {
        assert_eq!(code(&["tool", "--help"]), 0);
        assert_eq!(code(&["tool", "--version"]), 0);
    }
}
