//! Unified error types for chatheart.
//!
//! This module provides a single [`ChatheartError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Parsing never fails**: entries that don't match the grammar are
//!   counted and skipped, never surfaced as errors
//! - **Layout never panics**: empty corpora and out-of-range windows produce
//!   empty or clamped results
//! - **Errors are reserved** for I/O, invalid configuration and output
//!   serialization

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatheart operations.
///
/// # Example
///
/// ```rust
/// use chatheart::error::Result;
/// use chatheart::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatheartError>;

/// The error type for all chatheart operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatheartError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to read an input file.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A layout configuration value is out of its accepted range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending field (e.g., "wrap_width")
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An output format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    ///
    /// Occurs when loading a configuration file or writing JSON output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text formatting error while rendering SVG.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatheartError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatheartError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatheartError {
    /// Creates a read error carrying the path that failed.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatheartError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatheartError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatheartError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatheartError::Io(_) | ChatheartError::Read { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatheartError::InvalidConfig { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatheartError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatheartError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_read_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = ChatheartError::read("/path/to/chat.txt", io_err);
        let display = err.to_string();
        assert!(display.contains("/path/to/chat.txt"));
        assert!(display.contains("missing"));
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ChatheartError::invalid_config("wrap_width", "must be at least 1");
        let display = err.to_string();
        assert!(display.contains("wrap_width"));
        assert!(display.contains("must be at least 1"));
        assert!(err.is_invalid_config());
        assert!(!err.is_io());
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatheartError::invalid_format("output", "unknown extension 'xml'");
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains("xml"));
        assert!(err.is_invalid_format());
        assert!(!err.is_invalid_config());
    }

    #[test]
    fn test_utf8_error_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatheartError = utf8_err.into();
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("output conversion"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = ChatheartError::read(
            "chat.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        assert!(err.source().is_some());

        let err = ChatheartError::invalid_config("scale", "must be positive");
        assert!(err.source().is_none());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatheartError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let csv_err = csv::Error::from(io::Error::other("test"));
        let err: ChatheartError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatheartError::invalid_config("scale", "bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidConfig"));
    }
}
