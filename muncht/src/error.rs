//! Error handling module for the muncht CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use munch_lex::{LexError, VocabularyError};
use thiserror::Error;

/// Main error type for the muncht CLI application.
#[derive(Error, Debug)]
pub enum MunchtError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when the effective vocabulary cannot be compiled.
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// Error when an input file fails to tokenize.
    #[error("{path}:{}: error[{}]: {source}", .source.span(), .source.code())]
    Lex {
        /// Display name of the input.
        path: String,
        /// The scan failure.
        source: LexError,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MunchtError.
pub type Result<T> = std::result::Result<T, MunchtError>;

#[cfg(test)]
mod tests {
    use super::*;
    use munch_lex::{Found, VocabularyList};
    use munch_util::Span;

    #[test]
    fn test_config_error_display() {
        let err = MunchtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = MunchtError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err = MunchtError::Validation("jobs must be at least 1".to_string());
        assert_eq!(err.to_string(), "Validation error: jobs must be at least 1");
    }

    #[test]
    fn test_lex_error_display() {
        let err = MunchtError::Lex {
            path: "main.mn".to_string(),
            source: LexError::UnclassifiableCharacter {
                found: Found::Char('@'),
                context: "x".to_string(),
                span: Span::new(2, 3, 1, 3),
            },
        };
        assert_eq!(
            err.to_string(),
            "main.mn:1:3: error[L0001]: unclassifiable character '@' after \"x\""
        );
    }

    #[test]
    fn test_vocabulary_error_conversion() {
        let vocab_err = VocabularyError::EmptyEntry {
            list: VocabularyList::Operators,
            index: 2,
        };
        let err: MunchtError = vocab_err.into();
        assert_eq!(err.to_string(), "Vocabulary error: empty operator at index 2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MunchtError = io_err.into();
        assert!(matches!(err, MunchtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MunchtError = json_err.into();
        assert!(matches!(err, MunchtError::Json(_)));
    }
}
