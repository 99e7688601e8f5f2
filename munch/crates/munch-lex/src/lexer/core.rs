//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the per-character scan loop and
//! the helpers every state shares: starting a token, emitting it, and
//! building errors with the current context.

use munch_util::Span;

use super::state::LexState;
use crate::classify::CharClass;
use crate::cursor::Cursor;
use crate::error::{Found, LexError, LexResult, NumberDefect};
use crate::token::{NumberKind, Token, TokenKind};
use crate::vocabulary::Lexicon;

/// Single-pass tokenizer over one input text.
///
/// A `Lexer` owns the mutable scan context (accumulator, numeric kind,
/// output) for exactly one scan and borrows the immutable [`Lexicon`].
/// Most callers use [`Lexicon::tokenize`] instead of constructing one.
pub struct Lexer<'a> {
    /// Compiled vocabulary.
    pub(super) lexicon: &'a Lexicon,

    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Active state.
    pub(super) state: LexState,

    /// Characters of the token being built. After a token is emitted this
    /// keeps its lexeme until the next token starts, so errors raised
    /// between tokens can still name what came before.
    pub(super) current: String,

    /// Numeric kind of the literal being built.
    pub(super) number_kind: NumberKind,

    /// Span of the first character of the token being built.
    pub(super) token_start: Span,

    /// Completed tokens.
    pub(super) tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `source`.
    pub fn new(lexicon: &'a Lexicon, source: &'a str) -> Self {
        Self {
            lexicon,
            cursor: Cursor::new(source),
            state: LexState::ReadingSpaces,
            current: String::new(),
            number_kind: NumberKind::Int,
            token_start: Span::point(0, 1, 1),
            tokens: Vec::new(),
        }
    }

    /// Runs the scan to completion.
    ///
    /// Every character is fed to the active state in order. At the end of
    /// input the pending token is completed exactly as if one whitespace
    /// character followed it.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while let Some(c) = self.cursor.current_char() {
            self.state = self.step(c)?;
            self.cursor.advance();
        }
        self.finish()?;
        Ok(self.tokens)
    }

    /// Runs the active state's transition for `c`.
    fn step(&mut self, c: char) -> LexResult<LexState> {
        let class = self.lexicon.classify(c);
        match self.state {
            LexState::ReadingSpaces => self.reading_spaces(c, class),
            LexState::Word { keyword } => self.reading_word(keyword, c, class),
            LexState::Number => self.reading_number(c, class),
            LexState::ExpectingDigit => self.expecting_digit(c, class),
            LexState::Operator { node } => self.reading_operator(node, c, class),
        }
    }

    fn reading_spaces(&mut self, c: char, class: CharClass) -> LexResult<LexState> {
        match class {
            CharClass::Whitespace => Ok(LexState::ReadingSpaces),
            CharClass::Letter => Ok(self.begin_word(c)),
            CharClass::Digit => Ok(self.begin_number(c)),
            CharClass::Operator => self.begin_operator(c),
            CharClass::Dot | CharClass::Unknown => Err(self.reject(c, class)),
        }
    }

    /// Completes the pending token at end of input.
    fn finish(&mut self) -> LexResult<()> {
        match self.state {
            LexState::ReadingSpaces => Ok(()),
            LexState::Word { keyword } => {
                self.finish_word(keyword);
                Ok(())
            },
            LexState::Number => {
                self.finish_number();
                Ok(())
            },
            LexState::ExpectingDigit => {
                Err(self.malformed_number(NumberDefect::MissingFraction, Found::EndOfInput))
            },
            LexState::Operator { node } => self.finish_operator(node, Found::EndOfInput),
        }
    }

    /// Resets the accumulator to `c` and records where the token starts.
    pub(super) fn start_token(&mut self, c: char) {
        self.current.clear();
        self.current.push(c);
        self.token_start = self.cursor.current_span();
    }

    /// Emits the accumulated lexeme as a token of `kind`.
    ///
    /// The token ends where the character under the cursor begins, which is
    /// the end of input when called from [`finish`](Self::finish).
    pub(super) fn emit(&mut self, kind: TokenKind) {
        let span = self.token_start.with_end(self.cursor.position());
        tracing::trace!(kind = %kind, value = %self.current, %span, "token");
        self.tokens.push(Token::new(self.current.clone(), kind, span));
    }

    /// What the cursor is looking at.
    pub(super) fn found(&self) -> Found {
        self.cursor.current_char().map_or(Found::EndOfInput, Found::Char)
    }

    /// Error for a character that has no transition in the active state.
    pub(super) fn reject(&self, c: char, class: CharClass) -> LexError {
        let found = Found::Char(c);
        let context = self.current.clone();
        let span = self.cursor.current_span();
        match class {
            CharClass::Unknown => LexError::UnclassifiableCharacter {
                found,
                context,
                span,
            },
            class => LexError::UnexpectedCharacter {
                class,
                found,
                context,
                span,
            },
        }
    }

    pub(super) fn malformed_number(&self, defect: NumberDefect, found: Found) -> LexError {
        LexError::MalformedNumber {
            defect,
            found,
            context: self.current.clone(),
            span: self.cursor.current_span(),
        }
    }

    pub(super) fn unexpected_state(&self, found: Found) -> LexError {
        LexError::UnexpectedState {
            state: self.state.name(),
            found,
            context: self.current.clone(),
            span: self.cursor.current_span(),
        }
    }
}
