//! Configuration types for the three pipelines.
//!
//! Each pipeline has one config struct with documented defaults. The extractor
//! config has a builder because the CLI maps many flags onto it; the smaller
//! configs are plain structs with `Default`.

use crate::error::PdfToolError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default minimum trimmed character count for a page to count as text.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 50;

/// Default maximum length of a sanitised file stem.
pub const DEFAULT_MAX_STEM_LEN: usize = 80;

/// Configuration for the text-or-OCR extractor.
///
/// Built via [`ExtractConfig::builder()`] or [`ExtractConfig::default()`].
///
/// # Example
/// ```rust
/// use pdftriage::ExtractConfig;
///
/// let config = ExtractConfig::builder()
///     .min_text_chars(80)
///     .ocr_jobs(2)
///     .ocr_language("deu")
///     .build()
///     .unwrap();
/// assert_eq!(config.ocr.jobs, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// A page counts as text when its trimmed text is *longer* than this.
    /// Default: 50.
    pub min_text_chars: usize,

    /// OCR tool settings.
    pub ocr: OcrConfig,

    /// Explicit pdfium library path. If None, uses `./` then system paths.
    pub pdfium_lib_path: Option<PathBuf>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            ocr: OcrConfig::default(),
            pdfium_lib_path: None,
        }
    }
}

impl ExtractConfig {
    /// Create a new builder for `ExtractConfig`.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Settings for the external OCR tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Binary name or path. Default: `ocrmypdf`.
    pub binary: String,

    /// `--jobs` passed to the tool. Default: 4.
    pub jobs: usize,

    /// `--optimize` level (0–3). Default: 3.
    pub optimize: u8,

    /// Pass `--skip-text` so pages with a text layer are left alone. Default: true.
    pub skip_text: bool,

    /// Tesseract languages joined with `+` for `-l`. Empty means tool default.
    pub languages: Vec<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: "ocrmypdf".to_string(),
            jobs: 4,
            optimize: 3,
            skip_text: true,
            languages: Vec::new(),
        }
    }
}

/// Builder for [`ExtractConfig`].
#[derive(Debug)]
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    pub fn min_text_chars(mut self, n: usize) -> Self {
        self.config.min_text_chars = n;
        self
    }

    pub fn ocr_binary(mut self, binary: impl Into<String>) -> Self {
        self.config.ocr.binary = binary.into();
        self
    }

    pub fn ocr_jobs(mut self, n: usize) -> Self {
        self.config.ocr.jobs = n;
        self
    }

    pub fn ocr_optimize(mut self, level: u8) -> Self {
        self.config.ocr.optimize = level;
        self
    }

    pub fn ocr_language(mut self, lang: impl Into<String>) -> Self {
        self.config.ocr.languages.push(lang.into());
        self
    }

    pub fn ocr_languages<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ocr.languages = langs.into_iter().map(Into::into).collect();
        self
    }

    pub fn pdfium_lib_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_lib_path = Some(path.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractConfig, PdfToolError> {
        let c = &self.config;
        if c.ocr.binary.trim().is_empty() {
            return Err(PdfToolError::InvalidConfig(
                "OCR binary name must not be empty".into(),
            ));
        }
        if c.ocr.jobs == 0 {
            return Err(PdfToolError::InvalidConfig("OCR jobs must be ≥ 1".into()));
        }
        if c.ocr.optimize > 3 {
            return Err(PdfToolError::InvalidConfig(format!(
                "OCR optimize level must be 0–3, got {}",
                c.ocr.optimize
            )));
        }
        if let Some(bad) = c
            .ocr
            .languages
            .iter()
            .find(|l| l.is_empty() || !l.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_'))
        {
            return Err(PdfToolError::InvalidConfig(format!(
                "Invalid OCR language code '{bad}'"
            )));
        }
        Ok(self.config)
    }
}

/// Configuration for the Markdown renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Page separator in assembled output. Default: horizontal rule.
    pub page_separator: PageSeparator,

    /// Prepend YAML front-matter with document metadata. Default: false.
    pub include_metadata: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            page_separator: PageSeparator::HorizontalRule,
            include_metadata: false,
        }
    }
}

/// How to separate pages in the assembled Markdown output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSeparator {
    /// No separator; pages joined with "\n\n".
    None,
    /// Horizontal rule: "\n\n---\n\n" (default)
    #[default]
    HorizontalRule,
    /// HTML comment with page number: "<!-- page N -->"
    Comment,
    /// Custom string inserted between pages; `{page}` becomes the number.
    Custom(String),
}

impl PageSeparator {
    /// Render the separator string for the given page number (1-indexed).
    pub fn render(&self, page_num: usize) -> String {
        match self {
            PageSeparator::None => "\n\n".to_string(),
            PageSeparator::HorizontalRule => "\n\n---\n\n".to_string(),
            PageSeparator::Comment => format!("\n\n<!-- page {} -->\n\n", page_num),
            PageSeparator::Custom(s) => {
                format!("\n\n{}\n\n", s.replace("{page}", &page_num.to_string()))
            }
        }
    }

    /// Parse the `--separator` CLI value.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "none" => PageSeparator::None,
            "hr" | "---" => PageSeparator::HorizontalRule,
            "comment" => PageSeparator::Comment,
            _ => PageSeparator::Custom(s.to_string()),
        }
    }
}

/// Configuration for the filename sanitiser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizeConfig {
    /// Maximum stem length in characters. Default: 80.
    pub max_stem_len: usize,

    /// Only report planned renames. Default: false.
    pub dry_run: bool,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            max_stem_len: DEFAULT_MAX_STEM_LEN,
            dry_run: false,
        }
    }
}

impl SanitizeConfig {
    /// Validate constraints.
    pub fn validate(&self) -> Result<(), PdfToolError> {
        if self.max_stem_len == 0 {
            return Err(PdfToolError::InvalidConfig(
                "Maximum stem length must be ≥ 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = ExtractConfig::default();
        assert_eq!(c.min_text_chars, 50);
        assert_eq!(c.ocr.binary, "ocrmypdf");
        assert_eq!(c.ocr.jobs, 4);
        assert_eq!(c.ocr.optimize, 3);
        assert!(c.ocr.skip_text);
        assert_eq!(SanitizeConfig::default().max_stem_len, 80);
    }

    #[test]
    fn builder_rejects_zero_jobs() {
        let err = ExtractConfig::builder().ocr_jobs(0).build().unwrap_err();
        assert!(matches!(err, PdfToolError::InvalidConfig(_)));
    }

    #[test]
    fn builder_rejects_optimize_above_three() {
        assert!(ExtractConfig::builder().ocr_optimize(4).build().is_err());
        assert!(ExtractConfig::builder().ocr_optimize(0).build().is_ok());
    }

    #[test]
    fn builder_rejects_bad_language() {
        assert!(ExtractConfig::builder()
            .ocr_language("eng; rm -rf")
            .build()
            .is_err());
        let c = ExtractConfig::builder()
            .ocr_languages(["eng", "deu"])
            .build()
            .unwrap();
        assert_eq!(c.ocr.languages, vec!["eng", "deu"]);
    }

    #[test]
    fn separator_parse_and_render() {
        assert_eq!(PageSeparator::parse("none").render(2), "\n\n");
        assert_eq!(PageSeparator::parse("HR").render(2), "\n\n---\n\n");
        assert_eq!(
            PageSeparator::parse("comment").render(3),
            "\n\n<!-- page 3 -->\n\n"
        );
        assert_eq!(PageSeparator::parse("***").render(1), "\n\n***\n\n");
        assert_eq!(
            PageSeparator::parse("=== {page} ===").render(7),
            "\n\n=== 7 ===\n\n"
        );
    }

    #[test]
    fn sanitize_config_rejects_zero_len() {
        let c = SanitizeConfig {
            max_stem_len: 0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }
}
