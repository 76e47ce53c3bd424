//! Error types for Daybook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.
//!
//! Malformed persisted data is recovered by substituting defaults on read
//! (see [`crate::storage::Decoded`]); only a write over it is a `Storage`
//! error.

use thiserror::Error;

/// Result type alias for Daybook operations.
pub type Result<T> = std::result::Result<T, DaybookError>;

/// Core error type for Daybook operations.
#[derive(Debug, Error)]
pub enum DaybookError {
    /// Storage medium error (open, read, write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input (bad index, unknown vocabulary term)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The remote health assistant could not produce advice
    #[error("{0}")]
    Advice(String),
}

impl From<std::io::Error> for DaybookError {
    fn from(err: std::io::Error) -> Self {
        DaybookError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for DaybookError {
    fn from(err: rusqlite::Error) -> Self {
        DaybookError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DaybookError {
    fn from(err: serde_json::Error) -> Self {
        DaybookError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: DaybookError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, DaybookError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_advice_error_displays_message_verbatim() {
        let err = DaybookError::Advice("assistant unreachable".to_string());
        assert_eq!(err.to_string(), "assistant unreachable");
    }
}
