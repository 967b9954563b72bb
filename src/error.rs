//! Error types for the Retort library.
//!
//! All errors are represented by the [`RetortError`] enum. The two
//! startup-fatal conditions have their own variants: `Corpus` for a missing
//! or malformed training table, and `Training` for a degenerate training
//! set. Neither is ever surfaced to a per-request caller; a process that
//! hits one of them never starts serving.
//!
//! # Examples
//!
//! ```
//! use retort::error::{Result, RetortError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RetortError::training("training set is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Retort operations.
#[derive(Error, Debug)]
pub enum RetortError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (missing columns, unreadable source, etc.)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Training-related errors (empty or degenerate training set)
    #[error("Training error: {0}")]
    Training(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with RetortError.
pub type Result<T> = std::result::Result<T, RetortError>;

impl RetortError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        RetortError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RetortError::Analysis(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        RetortError::Training(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RetortError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RetortError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RetortError::corpus("missing column");
        assert_eq!(error.to_string(), "Corpus error: missing column");

        let error = RetortError::training("training set is empty");
        assert_eq!(error.to_string(), "Training error: training set is empty");

        let error = RetortError::analysis("bad token stream");
        assert_eq!(error.to_string(), "Analysis error: bad token stream");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let retort_error = RetortError::from(io_error);

        match retort_error {
            RetortError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
