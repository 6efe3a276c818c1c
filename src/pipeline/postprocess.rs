//! Post-processing: deterministic cleanup of extracted page text into
//! Markdown.
//!
//! Text pulled from a PDF content stream carries layout artefacts: CRLF line
//! endings, trailing spaces from justified columns, long runs of blank lines
//! where whitespace was positioned rather than written, soft hyphens and
//! zero-width characters, and bullet glyphs that Markdown does not recognise
//! as list markers. Each rule below is a pure `&str → String` pass.
//!
//! The input is plain text, so no rule infers headings or other block
//! structure. A body line that happens to start with `# ` is passed through
//! untouched.
//!
//! ## Rule Order
//!
//! Line endings are normalised first so every later rule can split on `\n`.
//! The final-newline pass runs last.

use once_cell::sync::Lazy;
use regex::Regex;

/// Clean one page of raw extracted text.
///
/// Trims trailing whitespace from each line, collapses runs of 3+ blank lines
/// down to 2, and trims leading/trailing blank lines from the page. Returns
/// an empty string for a page with no visible text.
pub fn clean_page(raw: &str) -> String {
    let raw = normalise_line_endings(raw);
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0_u32;
    for line in raw.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run <= 2 {
                out.push('\n');
            }
        } else {
            blank_run = 0;
            out.push_str(line);
            out.push('\n');
        }
    }

    let trimmed = out.trim_matches('\n');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}

/// Apply all document-level rules to assembled Markdown.
///
/// Rules (applied in order):
/// 1. Normalise line endings (CRLF → LF)
/// 2. Strip invisible Unicode (zero-width spaces, BOM, soft hyphens)
/// 3. Trim trailing whitespace per line
/// 4. Rewrite bullet glyphs (`•`, `▪`, `◦`, …) as `- ` list items
/// 5. Collapse 3+ consecutive blank lines down to 2
/// 6. Ensure the file ends with exactly one newline
pub fn clean_markdown(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = remove_invisible_chars(&s);
    let s = trim_trailing_whitespace(&s);
    let s = normalise_bullets(&s);
    let s = collapse_blank_lines(&s);
    ensure_final_newline(&s)
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Remove invisible Unicode characters ─────────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input.replace(
        [
            '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}',
        ],
        "",
    )
}

// ── Rule 3: Trim trailing whitespace per line ────────────────────────────────

fn trim_trailing_whitespace(input: &str) -> String {
    input
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Rule 4: Bullet glyphs ────────────────────────────────────────────────────

static RE_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)[•●▪■◦‣∙·][ \t]*").unwrap());

fn normalise_bullets(input: &str) -> String {
    RE_BULLET.replace_all(input, "$1- ").to_string()
}

// ── Rule 5: Collapse excessive blank lines ───────────────────────────────────

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{4,}").unwrap());

fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_LINES.replace_all(input, "\n\n\n").to_string()
}

// ── Rule 6: Ensure file ends with single newline ─────────────────────────────

fn ensure_final_newline(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        String::from("\n")
    } else {
        format!("{}\n", trimmed)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_page_trims_trailing_whitespace() {
        assert_eq!(clean_page("hello   \nworld  \n"), "hello\nworld\n");
    }

    #[test]
    fn clean_page_collapses_blank_lines() {
        assert_eq!(clean_page("a\n\n\n\n\nb\n"), "a\n\n\nb\n");
    }

    #[test]
    fn clean_page_empty_input() {
        assert_eq!(clean_page(""), String::new());
        assert_eq!(clean_page("\r\n\r\n  \n"), String::new());
    }

    #[test]
    fn test_normalise_line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_remove_invisible() {
        let input = "hello\u{200B}world\u{FEFF}foo\u{00AD}bar";
        assert_eq!(remove_invisible_chars(input), "helloworldfoobar");
    }

    #[test]
    fn test_bullets_become_list_items() {
        let input = "Intro\n• first\n  ▪ nested\n•second";
        assert_eq!(
            normalise_bullets(input),
            "Intro\n- first\n  - nested\n- second"
        );
    }

    #[test]
    fn test_bullet_mid_line_untouched() {
        assert_eq!(normalise_bullets("a • b"), "a • b");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn test_hash_prefixed_body_line_is_untouched() {
        let input = "Total\n# of units sold: 5\nend";
        assert_eq!(clean_markdown(input), "Total\n# of units sold: 5\nend\n");
    }

    #[test]
    fn test_ensure_final_newline() {
        assert_eq!(ensure_final_newline("hello"), "hello\n");
        assert_eq!(ensure_final_newline("hello\n\n\n"), "hello\n");
        assert_eq!(ensure_final_newline(""), "\n");
    }

    #[test]
    fn test_clean_markdown_full_pipeline() {
        let input = "Title\r\n\r\nSome\u{200B} text   \n\n\n\n\n\n• item\nSection";
        let result = clean_markdown(input);
        assert!(result.starts_with("Title\n\nSome text\n"));
        assert!(result.contains("- item\nSection\n"));
        assert!(result.ends_with('\n'));
        assert!(!result.contains("\n\n\n\n"));
    }
}
