//! Error types for the magicsniff content sniffer.
//!
//! Classification itself never fails: "no recognizable type" is reported
//! through the `Signature::ZeroByte` and `Signature::Unknown` sentinels.
//! Errors are reserved for callers that ask a specific classifier about a
//! source that is absent, and for opening file-backed sources.

use crate::io::error::IoError;
use thiserror::Error;

/// Main error type for magicsniff operations.
#[derive(Debug, Error)]
pub enum SniffError {
    /// The source is absent or holds no bytes.
    #[error("nil reader: the source is absent or empty")]
    NilSource,

    /// Opening or mapping a file-backed source failed.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl From<std::io::Error> for SniffError {
    fn from(err: std::io::Error) -> Self {
        SniffError::Io(IoError::StdIo(err))
    }
}

/// Result type alias for magicsniff operations
pub type Result<T> = std::result::Result<T, SniffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SniffError::NilSource;
        assert_eq!(
            err.to_string(),
            "nil reader: the source is absent or empty"
        );

        let err = SniffError::Io(IoError::FileTooLarge {
            limit: 10,
            found: 20,
        });
        assert!(err.to_string().starts_with("I/O error: "));
        assert!(err.to_string().contains("20 bytes"));
    }

    #[test]
    fn test_std_io_conversion() {
        let err: SniffError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, SniffError::Io(IoError::StdIo(_))));
    }
}
