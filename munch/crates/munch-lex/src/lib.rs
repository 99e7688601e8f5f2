//! munch-lex - Trie-driven single-pass tokenizer
//!
//! This crate splits plain text into a flat sequence of typed tokens using a
//! small deterministic state machine. Keywords and operators are not
//! hard-coded: they come from a [`Vocabulary`] that is compiled once into a
//! [`Lexicon`] (a character classifier plus two prefix tries) and then shared
//! by any number of scans.
//!
//! # Example Usage
//!
//! ```
//! use munch_lex::{Lexicon, TokenKind, Vocabulary};
//!
//! let lexicon = Lexicon::new(&Vocabulary::new(["if"], ["=", "=="])).unwrap();
//! let tokens = lexicon.tokenize("if x == 34.5").unwrap();
//!
//! let pairs: Vec<_> = tokens.iter().map(|t| t.as_pair()).collect();
//! assert_eq!(
//!     pairs,
//!     [
//!         ("if", TokenKind::Keyword),
//!         ("x", TokenKind::Word),
//!         ("==", TokenKind::Operator),
//!         ("34.5", TokenKind::Float),
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - Character classes and the operator-character set
//! - [`trie`] - Prefix trie used for keywords and operators
//! - [`vocabulary`] - Vocabulary configuration and the compiled lexicon
//! - [`lexer`] - The scan state machine
//! - [`token`] - Token type definitions
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Scan and vocabulary errors
//!
//! # Token Categories
//!
//! - **Keyword**: a run of ASCII letters that is exactly a configured keyword
//! - **Word**: any other run of ASCII letters
//! - **Int**: a run of decimal digits, leading zeros kept
//! - **Float**: digits, one decimal point, digits (`3.25`; not `3.` or `.5`)
//! - **Operator**: the longest configured operator along the input
//!
//! Whitespace separates tokens and is never emitted. A letter directly
//! after a digit (or a digit directly after a letter) is an error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod trie;
pub mod vocabulary;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod properties;

// Re-export main types for convenience
pub use classify::{CharClass, CharClassifier};
pub use cursor::Cursor;
pub use error::{
    Found, LexError, LexResult, NumberDefect, OperatorDefect, TrieError, VocabularyError,
    VocabularyList,
};
pub use lexer::{LexState, Lexer};
pub use token::{NumberKind, Token, TokenKind};
pub use trie::{NodeId, PrefixTrie};
pub use vocabulary::{Lexicon, Vocabulary, DEFAULT_KEYWORDS, DEFAULT_OPERATORS};

/// Tokenizes `text` against `lexicon`.
///
/// Shorthand for [`Lexicon::tokenize`].
pub fn tokenize(lexicon: &Lexicon, text: &str) -> LexResult<Vec<Token>> {
    lexicon.tokenize(text)
}
