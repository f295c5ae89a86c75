//! Reading and writing the working copy of a dump

use crate::errors::Result;
use crate::files::atomic::atomic_write;
use dumpalign_core::errors::DumpAlignError;
use std::fs;
use std::io;
use std::path::Path;

/// Decode `bytes` as UTF-8, dropping any invalid sequences
pub fn decode_discarding_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Working copy as found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy {
    /// Bytes exactly as read
    pub raw: Vec<u8>,
    /// `raw` with undecodable sequences dropped
    pub text: String,
}

impl WorkingCopy {
    fn from_bytes(raw: Vec<u8>) -> Self {
        let text = decode_discarding_invalid(&raw);
        Self { raw, text }
    }

    /// True when writing `text` would leave the file byte-identical
    pub fn matches(&self, text: &str) -> bool {
        self.raw == text.as_bytes()
    }
}

/// Read the working copy at `path`
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Any other read failure is returned as `ExErrorKind::Io`.
#[allow(clippy::result_large_err)]
pub fn read_working_file(path: &Path) -> Result<Option<WorkingCopy>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(WorkingCopy::from_bytes(bytes))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(DumpAlignError::WorkingFileRead {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

/// Replace the working copy at `path` with `text`
///
/// # Errors
///
/// Returns `ExErrorKind::Io` when the destination cannot be written.
#[allow(clippy::result_large_err)]
pub fn write_aligned_file(path: &Path, text: &str) -> Result<()> {
    atomic_write(path, text.as_bytes()).map_err(|source| {
        DumpAlignError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dumpalign_core::errors::ExErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_bytes_are_discarded() {
        let bytes = b"KERNEL32\xff\xfe.dll\n\xc3\x28ok";
        assert_eq!(decode_discarding_invalid(bytes), "KERNEL32.dll\n(ok");
    }

    #[test]
    fn test_valid_utf8_is_untouched() {
        let text = "Größe: 0x10 \u{fffd}\n";
        assert_eq!(decode_discarding_invalid(text.as_bytes()), text);
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.txt");
        assert_eq!(read_working_file(&missing).unwrap(), None);
    }

    #[test]
    fn test_read_then_write_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dump.txt");
        fs::write(&path, b"A\xff\nB\n").unwrap();

        let copy = read_working_file(&path).unwrap().unwrap();
        assert_eq!(copy.text, "A\nB\n");
        assert!(!copy.matches("A\nB\n"));

        write_aligned_file(&path, "B\nA\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "B\nA\n");
        assert!(read_working_file(&path).unwrap().unwrap().matches("B\nA\n"));
    }

    #[test]
    fn test_reading_a_directory_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_working_file(temp_dir.path()).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("read_working_file"));
    }

    #[test]
    fn test_unwritable_destination_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // a directory in place of the destination file makes rename fail
        let path = temp_dir.path().join("dump.txt");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let err = write_aligned_file(&path, "text\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("write_aligned_file"));
    }
}
