//! Character cursor for traversing source text.
//!
//! The lexer never looks ahead: it reads the character under the cursor,
//! runs one transition, then advances. The cursor's job is to remember the
//! byte offset, line and column of that character for spans.

use munch_util::Span;

/// A cursor over source text, one `char` at a time.
///
/// # Example
///
/// ```
/// use munch_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.current_char(), Some('a'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('b'));
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor, or `None` at the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let rest = self.source.get(self.position..)?;

        // Fast path for ASCII (most common case)
        match rest.as_bytes().first() {
            Some(&b) if b < 128 => Some(b as char),
            _ => rest.chars().next(),
        }
    }

    /// Moves past the current character, updating line and column.
    ///
    /// Does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Span of the character under the cursor (empty at the end).
    pub fn current_span(&self) -> Span {
        let len = self.current_char().map_or(0, char::len_utf8);
        Span::new(self.position, self.position + len, self.line, self.column)
    }
}
