//! Unified error type for taskdeck.
//!
//! Uses `thiserror` so lower-level failures chain through with `?`.

use std::io;
use thiserror::Error;

/// Taskdeck error type
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O error (creating the database directory etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// SQLite error
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Storage error (generic)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Taskdeck Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a Storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::storage("store mutex poisoned");
        assert_eq!(err.to_string(), "Storage error: store mutex poisoned");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }
}
