//! Error types for bspcheck operations.
//!
//! This module defines [`CheckError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `FileNotFound` and `ReadError` never escape a run; the validator turns
//!   them into failed checks
//! - Suite and argument errors surface through the CLI with exit code 2
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bspcheck operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A checked file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A checked file exists but could not be read as text.
    #[error("Failed to read {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    /// Suite file not found at the given location.
    #[error("Suite file not found: {path}")]
    SuiteNotFound { path: PathBuf },

    /// Failed to parse a suite file.
    #[error("Failed to parse suite at {path}: {message}")]
    SuiteParseError { path: PathBuf, message: String },

    /// Suite parsed but is structurally invalid.
    #[error("Invalid suite: {message}")]
    SuiteValidationError { message: String },

    /// Selector names neither a built-in suite nor an existing file.
    #[error("Unknown suite: {name}")]
    UnknownSuite { name: String },

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bspcheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
