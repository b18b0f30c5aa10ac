//! Error types for the Gazette search engine.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`GazetteError`] enum. Read-path callers rarely see these errors:
//! the search pipeline degrades internally (ranked match falls back to
//! substring match, a failing fallback yields an empty page). The write-path
//! indexing hook is the exception: an indexing failure must propagate so the
//! enclosing content write can abort.
//!
//! # Examples
//!
//! ```
//! use gazette::error::{GazetteError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GazetteError::analysis("empty analysis pipeline"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Gazette operations.
#[derive(Error, Debug)]
pub enum GazetteError {
    /// I/O errors (corpus files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Indexing errors; fatal to the content write that triggered them
    #[error("Index error: {0}")]
    Index(String),

    /// Query-related errors (planning, cursor decoding)
    #[error("Query error: {0}")]
    Query(String),

    /// Content store errors (unreachable store, inconsistent rows)
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GazetteError.
pub type Result<T> = std::result::Result<T, GazetteError>;

impl GazetteError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GazetteError::Analysis(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        GazetteError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        GazetteError::Query(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        GazetteError::Store(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GazetteError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GazetteError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
