//! Atomic output files.
//!
//! Output is streamed into a temp file created in the destination directory
//! and renamed over the target only once the writer has finished and flushed.
//! An interrupted or failed run leaves the previous target (if any) intact and
//! never a truncated one.

use crate::error::PdfToolError;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Map an I/O error on `path` into [`PdfToolError::OutputWriteFailed`].
pub fn write_failed(path: &Path) -> impl Fn(std::io::Error) -> PdfToolError + '_ {
    move |source| PdfToolError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `path` atomically with the given writer function.
pub fn write_atomic<T, F>(path: &Path, write: F) -> Result<T, PdfToolError>
where
    F: FnOnce(&mut dyn Write) -> Result<T, PdfToolError>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = temp_builder()
        .tempfile_in(dir)
        .map_err(write_failed(path))?;

    let value = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let value = write(&mut writer)?;
        writer.flush().map_err(write_failed(path))?;
        value
    };

    tmp.persist(path).map_err(|e| write_failed(path)(e.error))?;
    debug!("Wrote {}", path.display());
    Ok(value)
}

/// Write a whole string atomically.
pub fn write_string_atomic(path: &Path, contents: &str) -> Result<(), PdfToolError> {
    write_atomic(path, |w| {
        w.write_all(contents.as_bytes()).map_err(write_failed(path))
    })
}

#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = tempfile::Builder::new();
    builder
        .prefix(".pdftriage-")
        .suffix(".tmp")
        .permissions(std::fs::Permissions::from_mode(0o644));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".pdftriage-").suffix(".tmp");
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");
        write_string_atomic(&target, "first").unwrap();
        write_string_atomic(&target, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn failed_writer_keeps_previous_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.jsonl");
        write_string_atomic(&target, "intact\n").unwrap();

        let result: Result<(), _> = write_atomic(&target, |w| {
            w.write_all(b"half a rec").map_err(write_failed(&target))?;
            Err(PdfToolError::PageText {
                page: 2,
                detail: "boom".into(),
            })
        });

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "intact\n");
        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0, "temp file should be cleaned up");
    }

    #[test]
    fn missing_parent_directory_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no/such/dir/out.md");
        let err = write_string_atomic(&target, "x").unwrap_err();
        assert!(matches!(err, PdfToolError::OutputWriteFailed { .. }));
    }
}
