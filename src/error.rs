//! Error types for rs-readable.
//!
//! This module defines the error types returned by document reading and
//! extraction operations.

use std::path::PathBuf;

/// Error type for reading and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the source document from disk failed.
    ///
    /// The read failure channel is always checked before the payload is
    /// used; a missing or unreadable file never reaches the parser.
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The readability engine rejected the document and no fallback was
    /// permitted.
    #[error("readability extraction failed: {0}")]
    Extraction(String),

    /// No extractable content was found and the caller required some.
    #[error("no extractable content found")]
    NoContent,
}

/// Result type alias for reading and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
