//! User-facing status lines.
//!
//! Outcomes are reported on stdout as short lines with a symbolic prefix:
//!
//! ```text
//! Processing: scan.pdf
//!   → No text found, attempting OCR...
//!   ✗ OCR failed, trying basic extraction anyway...
//!   ⚠ Partial extraction: scan.txt
//! ```
//!
//! Colour is applied only when stdout is a terminal.

use std::fmt;
use std::io::IsTerminal;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `→` a step is starting.
    Step,
    /// `✓` a step produced its output.
    Success,
    /// `⚠` degraded or skipped, not an error.
    Warning,
    /// `✗` a step failed.
    Failure,
}

impl Status {
    pub fn symbol(self) -> &'static str {
        match self {
            Status::Step => "→",
            Status::Success => "✓",
            Status::Warning => "⚠",
            Status::Failure => "✗",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Status::Step => "\x1b[36m",
            Status::Success => "\x1b[32m",
            Status::Warning => "\x1b[33m",
            Status::Failure => "\x1b[31m",
        }
    }
}

/// An indented status line, ready to print.
#[derive(Debug, Clone)]
pub struct StatusLine<'a> {
    status: Status,
    message: &'a str,
    color: bool,
}

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.color {
            write!(
                f,
                "  {}{}\x1b[0m {}",
                self.status.ansi(),
                self.status.symbol(),
                self.message
            )
        } else {
            write!(f, "  {} {}", self.status.symbol(), self.message)
        }
    }
}

/// Prints status lines to stdout; silent when `quiet`.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
    quiet: bool,
}

impl Reporter {
    /// Detect colour support from stdout.
    pub fn stdout(quiet: bool) -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
            quiet,
        }
    }

    /// Plain reporter with explicit settings.
    pub fn new(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }

    pub fn format<'a>(&self, status: Status, message: &'a str) -> StatusLine<'a> {
        StatusLine {
            status,
            message,
            color: self.color,
        }
    }

    /// Unprefixed header line, e.g. `Processing: file.pdf`.
    pub fn header(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    pub fn line(&self, status: Status, message: &str) {
        if !self.quiet {
            println!("{}", self.format(status, message));
        }
    }

    pub fn step(&self, message: &str) {
        self.line(Status::Step, message);
    }

    pub fn success(&self, message: &str) {
        self.line(Status::Success, message);
    }

    pub fn warning(&self, message: &str) {
        self.line(Status::Warning, message);
    }

    pub fn failure(&self, message: &str) {
        self.line(Status::Failure, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_indented_with_symbol() {
        let r = Reporter::new(false, false);
        assert_eq!(
            r.format(Status::Success, "Text extracted: a.txt").to_string(),
            "  ✓ Text extracted: a.txt"
        );
        assert_eq!(
            r.format(Status::Warning, "Partial extraction: a.txt").to_string(),
            "  ⚠ Partial extraction: a.txt"
        );
    }

    #[test]
    fn coloured_lines_wrap_only_the_symbol() {
        let r = Reporter::new(true, false);
        let s = r.format(Status::Failure, "OCR failed").to_string();
        assert_eq!(s, "  \x1b[31m✗\x1b[0m OCR failed");
    }
}
