//! Exit status and output of the built binaries. None of these need pdfium.

#![cfg(feature = "cli")]

use std::fs;
use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

const EXTRACT: &str = env!("CARGO_BIN_EXE_extract-text-or-ocr");
const CONVERT: &str = env!("CARGO_BIN_EXE_pdf-to-md-jsonl");
const SANITIZE: &str = env!("CARGO_BIN_EXE_sanitize-filenames");

#[test]
fn missing_argument_exits_one() {
    for bin in [EXTRACT, CONVERT, SANITIZE] {
        let out = run(bin, &[]);
        assert_eq!(out.status.code(), Some(1), "{bin}");
        let usage = format!(
            "{}{}",
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
        assert!(usage.contains("Usage"), "{bin}: {usage}");
    }
}

#[test]
fn help_and_version_exit_zero() {
    for bin in [EXTRACT, CONVERT, SANITIZE] {
        assert_eq!(run(bin, &["--help"]).status.code(), Some(0), "{bin}");
        assert_eq!(run(bin, &["--version"]).status.code(), Some(0), "{bin}");
    }
}

#[test]
fn missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.pdf");
    let absent = absent.to_str().unwrap();
    assert_eq!(run(EXTRACT, &[absent]).status.code(), Some(1));
    assert_eq!(run(CONVERT, &[absent]).status.code(), Some(1));
    assert_eq!(run(SANITIZE, &[absent]).status.code(), Some(1));
}

#[test]
fn sanitizer_prints_bare_file_names_and_total() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("nested")).unwrap();
    fs::write(root.path().join("nested").join("a b.pdf"), b"%PDF-1.4\n").unwrap();

    let out = run(SANITIZE, &[root.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Renamed: a b.pdf -> a_b.pdf\n"), "{stdout}");
    assert!(stdout.ends_with("\nTotal files renamed: 1\n"), "{stdout}");
}

#[test]
fn sanitizer_dry_run_says_would_rename() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("x (1).pdf"), b"%PDF-1.4\n").unwrap();

    let out = run(SANITIZE, &["--dry-run", root.path().to_str().unwrap()]);
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Would rename: x (1).pdf -> x_1.pdf\n"), "{stdout}");
    assert!(root.path().join("x (1).pdf").exists());
}
