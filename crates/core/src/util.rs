//! Shared pre-flight checks for qpdf invocations.

use std::path::Path;

use crate::error::{QpdfError, Result};

/// Checks that `input` is non-empty and names an existing file.
///
/// The two failures are distinct so callers can tell "you forgot the
/// argument" apart from "the file isn't there".
pub(crate) fn ensure_input_file(input: &Path) -> Result<()> {
    if input.as_os_str().is_empty() {
        return Err(QpdfError::MissingInput);
    }
    if !input.exists() {
        return Err(QpdfError::InputNotFound);
    }
    Ok(())
}

/// Rejects an output path that already exists unless overwriting is allowed.
///
/// `None` means the caller wants the bytes on stdout, which never collides
/// with anything.
pub(crate) fn ensure_output_writable(output: Option<&Path>, overwrite: bool) -> Result<()> {
    if let Some(output) = output
        && !overwrite
        && output.exists()
    {
        return Err(QpdfError::OutputExists);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_input_is_rejected_before_the_filesystem_is_consulted() {
        let err = ensure_input_file(Path::new("")).unwrap_err();
        assert!(matches!(err, QpdfError::MissingInput));
    }

    #[test]
    fn nonexistent_input_is_rejected() {
        let err = ensure_input_file(Path::new("/no/such/file.pdf")).unwrap_err();
        assert!(matches!(err, QpdfError::InputNotFound));
    }

    #[test]
    fn existing_input_passes() {
        let file = NamedTempFile::new().unwrap();
        assert!(ensure_input_file(file.path()).is_ok());
    }

    #[test]
    fn existing_output_needs_overwrite() {
        let file = NamedTempFile::new().unwrap();
        let err = ensure_output_writable(Some(file.path()), false).unwrap_err();
        assert!(matches!(err, QpdfError::OutputExists));
        assert!(ensure_output_writable(Some(file.path()), true).is_ok());
    }

    #[test]
    fn fresh_or_absent_output_always_passes() {
        let path = PathBuf::from("/tmp/definitely-not-there-48151623.pdf");
        assert!(ensure_output_writable(Some(&path), false).is_ok());
        assert!(ensure_output_writable(None, false).is_ok());
    }
}
