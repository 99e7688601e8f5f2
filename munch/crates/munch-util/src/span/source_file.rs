//! Whole-file view of source text for mapping offsets back to lines.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceError, SourceResult};

/// A source text with its display name and precomputed line starts
///
/// # Examples
///
/// ```
/// use munch_util::span::SourceFile;
///
/// let file = SourceFile::new("main.mn", "if x\n  y");
/// assert_eq!(file.name(), "main.mn");
/// assert_eq!(file.line_count(), 2);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// The column is counted in characters, matching the columns the lexer
    /// records in its spans.
    ///
    /// # Examples
    ///
    /// ```
    /// use munch_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("t", "ab\ncd");
    /// assert_eq!(file.offset_to_line_col(4), (2, 2));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self.content[line_start..]
            .char_indices()
            .take_while(|&(i, _)| line_start + i < offset)
            .count();
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use munch_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("t", "line1\r\nline2\n");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(9), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Get the source line a span starts on
    pub fn line_of(&self, span: Span) -> Option<&str> {
        let (line, _) = self.offset_to_line_col(span.start);
        self.line_at(line)
    }

    /// Extract the text covered by a span, with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use munch_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("t", "if x");
    /// assert_eq!(file.snippet(Span::new(3, 4, 1, 4)).unwrap(), "x");
    /// ```
    pub fn snippet(&self, span: Span) -> SourceResult<&str> {
        let (start, end) = (span.start, span.end);
        if start > end {
            return Err(SourceError::InvalidRange { start, end });
        }
        if end > self.content.len() {
            return Err(SourceError::OutOfBounds {
                file_len: self.content.len(),
                start,
                end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceError::NotCharBoundary { start, end });
        }
        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_line_count_with_trailing_newline() {
        let file = SourceFile::new("t", "a\nb\n");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_at(3), Some(""));
    }

    #[test]
    fn test_offset_to_line_col_start_of_line() {
        let file = SourceFile::new("t", "ab\ncd\nef");
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.offset_to_line_col(3), (2, 1));
        assert_eq!(file.offset_to_line_col(6), (3, 1));
    }

    #[test]
    fn test_offset_to_line_col_counts_characters() {
        // 'é' is two bytes; 'x' sits at byte 3, column 3
        let file = SourceFile::new("t", "aéx");
        assert_eq!(file.offset_to_line_col(3), (1, 3));
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let file = SourceFile::new("t", "abc");
        assert_eq!(file.offset_to_line_col(100), (1, 4));
    }

    #[test]
    fn test_line_of_span() {
        let file = SourceFile::new("t", "first\nsecond line");
        assert_eq!(file.line_of(Span::new(8, 9, 2, 3)), Some("second line"));
    }

    #[test]
    fn test_snippet_errors() {
        let file = SourceFile::new("t", "aé");
        assert_eq!(
            file.snippet(Span::new(2, 1, 1, 1)),
            Err(SourceError::InvalidRange { start: 2, end: 1 })
        );
        assert!(matches!(
            file.snippet(Span::new(0, 10, 1, 1)),
            Err(SourceError::OutOfBounds { .. })
        ));
        assert_eq!(
            file.snippet(Span::new(0, 2, 1, 1)),
            Err(SourceError::NotCharBoundary { start: 0, end: 2 })
        );
    }

    #[quickcheck]
    fn prop_every_char_maps_into_its_line(text: String) -> bool {
        let file = SourceFile::new("q", text.as_str());
        text.char_indices().all(|(offset, ch)| {
            let (line, column) = file.offset_to_line_col(offset);
            match file.line_at(line) {
                Some(content) if ch != '\n' && ch != '\r' => {
                    content.chars().nth(column - 1) == Some(ch)
                },
                Some(_) => true,
                None => false,
            }
        })
    }
}
