//! Appends rendered wrapper methods to an emitted base file.

use genclient_core::{Error, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends `functions` to the existing file at `path`.
///
/// The file must already exist; it is never created here, so a missing base
/// file surfaces as an error instead of a client without its header.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened for append, written,
/// or flushed. A failed write is not rolled back.
pub fn append_functions(path: &Path, functions: &str) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(functions.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    tracing::debug!("Appended {} bytes to {}", functions.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generated.foo.go");
        fs::write(&path, "package bar\n").unwrap();

        append_functions(&path, "\nfunc (p *Foo) A() {}\n").unwrap();
        append_functions(&path, "\nfunc (p *Foo) B() {}\n").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "package bar\n\nfunc (p *Foo) A() {}\n\nfunc (p *Foo) B() {}\n"
        );
    }

    #[test]
    fn test_append_empty_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generated.foo.go");
        fs::write(&path, "package bar\n").unwrap();

        append_functions(&path, "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package bar\n");
    }

    #[test]
    fn test_append_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.go");

        let err = append_functions(&path, "func x() {}").unwrap_err();

        assert!(err.is_io_error());
        assert!(!path.exists());
    }
}
