//! Token definitions.
//!
//! A [`Token`] pairs the exact lexeme read from the input with the
//! [`TokenKind`] the lexer assigned to it and the [`Span`] it was read from.

use std::fmt;

use munch_util::Span;
use serde::{Deserialize, Serialize};

/// Classification of a completed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A word that is a configured keyword.
    Keyword,
    /// Any other run of ASCII letters.
    Word,
    /// A configured operator, matched longest-first.
    Operator,
    /// A run of decimal digits.
    Int,
    /// Digits, one decimal point, digits.
    Float,
}

impl TokenKind {
    /// Lowercase name used in text output and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Word => "word",
            TokenKind::Operator => "operator",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric kind of the literal currently being scanned.
///
/// Starts as `Int` and switches to `Float` when the literal's single decimal
/// point is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberKind {
    /// No decimal point seen yet.
    #[default]
    Int,
    /// One decimal point seen.
    Float,
}

impl From<NumberKind> for TokenKind {
    fn from(kind: NumberKind) -> Self {
        match kind {
            NumberKind::Int => TokenKind::Int,
            NumberKind::Float => TokenKind::Float,
        }
    }
}

/// A lexical token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The lexeme exactly as it appeared in the input.
    pub value: String,
    /// What the lexeme was recognized as.
    pub kind: TokenKind,
    /// Where the lexeme was read from.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(value: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            value: value.into(),
            kind,
            span,
        }
    }

    /// The lexeme.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// `(value, kind)` view, ignoring the span.
    pub fn as_pair(&self) -> (&str, TokenKind) {
        (&self.value, self.kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}
