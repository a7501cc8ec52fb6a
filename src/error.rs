//! Error types for cleanfile library.

use crate::detect::DocumentFormat;
use crate::options::StripFormat;
use std::io;
use thiserror::Error;

/// Result type alias for cleanfile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cleanfile library.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested strip format does not match what the content looks like.
    ///
    /// Raised before the line scan starts, so no output exists for the run.
    #[error("file does not appear to be {requested} (detected: {detected})")]
    FormatMismatch {
        requested: StripFormat,
        detected: DocumentFormat,
    },

    /// Input could not be decoded as Unicode text.
    #[error("Text encoding error: {0}")]
    Encoding(String),

    /// I/O error while reading input from a path.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mismatch_message_names_both_formats() {
        let err = Error::FormatMismatch {
            requested: StripFormat::Markdown,
            detected: DocumentFormat::Html,
        };
        assert_eq!(
            err.to_string(),
            "file does not appear to be Markdown (detected: html)"
        );
    }

    #[test]
    fn test_utf8_error_maps_to_encoding() {
        let bytes = vec![0x66, 0x6F, 0xFF];
        let err: Error = String::from_utf8(bytes).unwrap_err().into();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
