//! Shared helpers for creating temporary files.

use magicsniff::{IOLimits, SafeReader};
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given content.
///
/// The file is removed when the returned `NamedTempFile` is dropped.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// Writes `content` to a temporary file and opens it with default limits.
pub fn open_temp(content: &[u8]) -> (NamedTempFile, SafeReader) {
    let file = create_temp_file(content);
    let reader = SafeReader::open(file.path(), IOLimits::default()).unwrap();
    (file, reader)
}
