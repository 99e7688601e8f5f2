//! Error types for munch-lex.
//!
//! [`LexError`] is returned by a scan that hits its first fatal condition.
//! [`VocabularyError`] is returned when a keyword or operator list cannot be
//! compiled into a [`Lexicon`](crate::Lexicon).

use std::fmt;

use munch_util::Span;
use thiserror::Error;

use crate::classify::CharClass;

/// The input a failing transition was looking at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Found {
    /// An input character.
    Char(char),
    /// The input ran out while a token was still open.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "'{}'", c.escape_debug()),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Why a number literal was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberDefect {
    /// The decimal point was not immediately followed by a digit.
    MissingFraction,
    /// A second decimal point inside one literal.
    SecondDecimalPoint,
}

impl fmt::Display for NumberDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberDefect::MissingFraction => f.write_str("expected a digit after the decimal point"),
            NumberDefect::SecondDecimalPoint => {
                f.write_str("a number literal may contain only one decimal point")
            },
        }
    }
}

/// Why an operator sequence was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorDefect {
    /// The accumulated characters are a proper prefix of some operator but
    /// not an operator themselves, and the next input does not continue it.
    Incomplete,
    /// No configured operator begins with the offending character.
    NoOperatorStartsWith,
}

/// A fatal lexical error.
///
/// Every variant records what was found, the accumulated lexeme at the
/// moment of failure (`context`), and where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside every [`CharClass`].
    #[error("unclassifiable character {found} after \"{context}\"")]
    UnclassifiableCharacter {
        found: Found,
        context: String,
        span: Span,
    },

    /// A decimal point without a following digit, or a second decimal point.
    #[error("malformed number literal \"{context}\": {defect}, found {found}")]
    MalformedNumber {
        defect: NumberDefect,
        found: Found,
        context: String,
        span: Span,
    },

    /// Operator characters that do not form a configured operator.
    #[error("{}", operator_message(.defect, .found, .context))]
    InvalidOperator {
        defect: OperatorDefect,
        found: Found,
        context: String,
        span: Span,
    },

    /// A classifiable character in a state with no transition for its class.
    #[error("unexpected {class} {found} after \"{context}\"")]
    UnexpectedCharacter {
        class: CharClass,
        found: Found,
        context: String,
        span: Span,
    },

    /// The state machine reached a combination its own invariants rule out.
    #[error("internal lexer error: state `{state}` cannot accept {found} (context \"{context}\")")]
    UnexpectedState {
        state: &'static str,
        found: Found,
        context: String,
        span: Span,
    },
}

fn operator_message(defect: &OperatorDefect, found: &Found, context: &str) -> String {
    match defect {
        OperatorDefect::Incomplete => {
            format!("\"{}\" is not a valid operator (followed by {})", context, found)
        },
        OperatorDefect::NoOperatorStartsWith => format!("no operator starts with {}", found),
    }
}

impl LexError {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnclassifiableCharacter { .. } => "L0001",
            LexError::MalformedNumber { .. } => "L0002",
            LexError::InvalidOperator { .. } => "L0003",
            LexError::UnexpectedCharacter { .. } => "L0004",
            LexError::UnexpectedState { .. } => "L0005",
        }
    }

    /// Location of the offending character (empty at end of input).
    pub fn span(&self) -> Span {
        match self {
            LexError::UnclassifiableCharacter { span, .. }
            | LexError::MalformedNumber { span, .. }
            | LexError::InvalidOperator { span, .. }
            | LexError::UnexpectedCharacter { span, .. }
            | LexError::UnexpectedState { span, .. } => *span,
        }
    }

    /// The offending input.
    pub fn found(&self) -> Found {
        match self {
            LexError::UnclassifiableCharacter { found, .. }
            | LexError::MalformedNumber { found, .. }
            | LexError::InvalidOperator { found, .. }
            | LexError::UnexpectedCharacter { found, .. }
            | LexError::UnexpectedState { found, .. } => *found,
        }
    }

    /// The accumulated lexeme at the point of failure.
    pub fn context(&self) -> &str {
        match self {
            LexError::UnclassifiableCharacter { context, .. }
            | LexError::MalformedNumber { context, .. }
            | LexError::InvalidOperator { context, .. }
            | LexError::UnexpectedCharacter { context, .. }
            | LexError::UnexpectedState { context, .. } => context,
        }
    }

    /// Returns true for errors caused by the input rather than by the lexer.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, LexError::UnexpectedState { .. })
    }
}

/// Which configured list a vocabulary entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VocabularyList {
    /// The keyword list.
    Keywords,
    /// The operator list.
    Operators,
}

impl fmt::Display for VocabularyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyList::Keywords => f.write_str("keyword"),
            VocabularyList::Operators => f.write_str("operator"),
        }
    }
}

/// A keyword or operator list that cannot be compiled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// An empty entry; inserting it would mark the trie root terminal.
    #[error("empty {list} at index {index}")]
    EmptyEntry { list: VocabularyList, index: usize },

    /// A keyword with a character the lexer never accumulates into a word.
    #[error("keyword \"{keyword}\" contains {found}; keywords may only contain ASCII letters")]
    InvalidKeyword { keyword: String, found: Found },

    /// An operator with a character that classifies ahead of the operator class.
    #[error("operator \"{operator}\" contains {found}, which is read as a {class} and can never be part of an operator")]
    UnreachableOperator {
        operator: String,
        found: Found,
        class: CharClass,
    },
}

/// Error type for trie construction
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The word at `index` is empty.
    #[error("empty word at index {index}")]
    EmptyWord { index: usize },
}

/// Result type alias for scans
pub type LexResult<T> = std::result::Result<T, LexError>;
