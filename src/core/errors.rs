//! Error types for the orthopairs library.
//!
//! Only conditions that abort a run surface as errors: a bad predictions
//! root, an unreadable input file, or a failed write to the output file.
//! Malformed rows and gene tokens are not errors, they are logged and
//! skipped at the extraction site.

use std::io;

use thiserror::Error;

/// Main result type for orthopairs operations.
pub type Result<T> = std::result::Result<T, OrthopairsError>;

/// Error type for all orthopairs operations.
#[derive(Error, Debug)]
pub enum OrthopairsError {
    /// I/O related errors (directory walking, file reads, output writes)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },
}

impl OrthopairsError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

// Implement From traits for common error types
impl From<io::Error> for OrthopairsError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = OrthopairsError::config("Invalid configuration");
        assert!(matches!(err, OrthopairsError::Config { .. }));

        let err = OrthopairsError::config_field("missing directory", "predictions");
        if let OrthopairsError::Config { field, .. } = err {
            assert_eq!(field, Some("predictions".to_string()));
        } else {
            panic!("expected Config variant");
        }
    }

    #[test]
    fn test_io_error_display() {
        let err = OrthopairsError::io(
            "failed to open 'x.tsv'",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "I/O error: failed to open 'x.tsv'");
    }

    #[test]
    fn test_from_io_error() {
        let err: OrthopairsError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, OrthopairsError::Io { .. }));
    }
}
