//! Span module - Source location tracking.
//!
//! This module provides [`Span`], a byte range annotated with the line and
//! column of its first character, and [`SourceFile`], which maps byte offsets
//! back to lines for error reporting.
//!
//! # Examples
//!
//! ```
//! use munch_util::span::Span;
//!
//! // "x" at byte 4, line 1, column 5
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.len(), 1);
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source location span
///
/// A `Span` represents a range in source text, identified by:
/// - Byte offsets (`start` inclusive, `end` exclusive)
/// - Line and column of `start` (1-based, column counted in characters)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset
    ///
    /// Used for positions that have no extent, such as the end of input.
    ///
    /// # Examples
    ///
    /// ```
    /// use munch_util::span::Span;
    ///
    /// let point = Span::point(12, 2, 3);
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, 12);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Extend this span so that it ends at `end`
    #[inline]
    pub fn with_end(mut self, end: usize) -> Self {
        self.end = end.max(self.start);
        self
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
