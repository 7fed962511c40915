//! Error types for studentdb
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using StudentDbError
pub type Result<T> = std::result::Result<T, StudentDbError>;

/// Unified error type for studentdb operations
#[derive(Debug, Error)]
pub enum StudentDbError {
    // -------------------------------------------------------------------------
    // Record Errors (recoverable, no state change)
    // -------------------------------------------------------------------------
    #[error("Student with id '{id}' already exists")]
    Duplicate { id: String },

    #[error("Student with id '{id}' not found")]
    NotFound { id: String },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage File Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt store: {0}")]
    CorruptStore(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StudentDbError {
    /// True for errors that leave the store untouched and can be shown to a user
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Duplicate { .. } | Self::NotFound { .. })
    }
}
