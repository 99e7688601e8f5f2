//! Core error types for munch-util crate

use thiserror::Error;

/// Error type for source text lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid byte range
    #[error("Invalid range: start {start} > end {end}")]
    InvalidRange { start: usize, end: usize },

    /// Range out of bounds for the file
    #[error("Range out of bounds: file has {file_len} bytes, range is {start}..{end}")]
    OutOfBounds {
        file_len: usize,
        start: usize,
        end: usize,
    },

    /// Range splits a multi-byte character
    #[error("Range {start}..{end} is not on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// Result type alias for source text lookups
pub type SourceResult<T> = std::result::Result<T, SourceError>;
