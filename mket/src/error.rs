//! Error handling module for the mket CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the mket CLI application.
#[derive(Error, Debug)]
pub enum MketError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be loaded.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command input is rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A checked file contained characters that start no token.
    #[error("found {count} illegal character(s)")]
    IllegalTokens {
        /// Total number of `ILLEGAL` tokens across all checked files.
        count: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MketError.
pub type Result<T> = std::result::Result<T, MketError>;
