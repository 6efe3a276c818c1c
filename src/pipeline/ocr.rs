//! OCR through the external `ocrmypdf` tool.
//!
//! The tool is located on `PATH` first; a missing binary is a soft failure
//! ([`PdfToolError::OcrToolMissing`]) so the extractor can fall back to
//! whatever text layer the original has. The tool's own output is captured:
//! stderr is logged at debug level and its tail is attached to
//! [`PdfToolError::OcrFailed`] when the exit status is non-zero.

use crate::config::OcrConfig;
use crate::error::PdfToolError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Lines of stderr kept in [`PdfToolError::OcrFailed`].
const STDERR_TAIL_LINES: usize = 3;

/// A located OCR binary plus its settings.
#[derive(Debug, Clone)]
pub struct OcrTool {
    program: PathBuf,
    config: OcrConfig,
}

impl OcrTool {
    /// Find `config.binary` on `PATH`.
    pub fn locate(config: &OcrConfig) -> Result<Self, PdfToolError> {
        let program = which::which(&config.binary).map_err(|_| PdfToolError::OcrToolMissing {
            tool: config.binary.clone(),
        })?;
        Ok(Self::new(program, config))
    }

    /// Find `config.binary` in an explicit search path (`PATH` syntax).
    pub fn locate_in(config: &OcrConfig, paths: impl AsRef<OsStr>) -> Result<Self, PdfToolError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let program = which::which_in(&config.binary, Some(paths), cwd).map_err(|_| {
            PdfToolError::OcrToolMissing {
                tool: config.binary.clone(),
            }
        })?;
        Ok(Self::new(program, config))
    }

    fn new(program: PathBuf, config: &OcrConfig) -> Self {
        debug!("Using OCR tool at {}", program.display());
        Self {
            program,
            config: config.clone(),
        }
    }

    /// Resolved path of the binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for one run.
    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if self.config.skip_text {
            args.push("--skip-text".into());
        }
        args.push("--optimize".into());
        args.push(self.config.optimize.to_string().into());
        args.push("--jobs".into());
        args.push(self.config.jobs.to_string().into());
        if !self.config.languages.is_empty() {
            args.push("-l".into());
            args.push(self.config.languages.join("+").into());
        }
        args.push(input.as_os_str().to_owned());
        args.push(output.as_os_str().to_owned());
        args
    }

    /// OCR `input` into a searchable PDF at `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<(), PdfToolError> {
        let tool = self.config.binary.clone();
        info!("Running {} on {}", tool, input.display());

        let result = Command::new(&self.program)
            .args(self.args(input, output))
            .output()
            .map_err(|source| PdfToolError::OcrSpawn {
                tool: tool.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&result.stderr);
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            debug!("{}: {}", tool, line);
        }

        if !result.status.success() {
            return Err(PdfToolError::OcrFailed {
                tool,
                code: result.status.code(),
                stderr: stderr_tail(&stderr),
            });
        }

        info!("OCR complete: {}", output.display());
        Ok(())
    }
}

/// Last few non-empty lines of `stderr`, joined with `" | "`.
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join(" | ")
}
