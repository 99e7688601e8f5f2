//! Number literal scanning.
//!
//! Literals are decimal digits with at most one decimal point, and the
//! decimal point must be followed immediately by a digit: `12`, `3.25`.
//! Trailing-dot (`3.`) and leading-dot (`.5`) forms are rejected.

use super::state::LexState;
use crate::classify::CharClass;
use crate::error::{Found, LexResult, NumberDefect};
use crate::token::NumberKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Starts an integer literal at digit `c`.
    pub(super) fn begin_number(&mut self, c: char) -> LexState {
        self.start_token(c);
        self.number_kind = NumberKind::Int;
        LexState::Number
    }

    pub(super) fn reading_number(&mut self, c: char, class: CharClass) -> LexResult<LexState> {
        match class {
            CharClass::Digit => {
                self.current.push(c);
                Ok(LexState::Number)
            },
            CharClass::Dot => match self.number_kind {
                NumberKind::Int => {
                    self.number_kind = NumberKind::Float;
                    self.current.push(c);
                    Ok(LexState::ExpectingDigit)
                },
                NumberKind::Float => {
                    Err(self.malformed_number(NumberDefect::SecondDecimalPoint, Found::Char(c)))
                },
            },
            CharClass::Whitespace => {
                self.finish_number();
                Ok(LexState::ReadingSpaces)
            },
            CharClass::Operator => {
                self.finish_number();
                self.begin_operator(c)
            },
            CharClass::Letter | CharClass::Unknown => Err(self.reject(c, class)),
        }
    }

    /// The character after a decimal point. Anything but a digit is a
    /// malformed literal.
    pub(super) fn expecting_digit(&mut self, c: char, class: CharClass) -> LexResult<LexState> {
        if self.number_kind != NumberKind::Float {
            return Err(self.unexpected_state(Found::Char(c)));
        }
        match class {
            CharClass::Digit => {
                self.current.push(c);
                Ok(LexState::Number)
            },
            _ => Err(self.malformed_number(NumberDefect::MissingFraction, Found::Char(c))),
        }
    }

    /// Emits the literal as `Int` or `Float` and resets the numeric kind.
    pub(super) fn finish_number(&mut self) {
        self.emit(self.number_kind.into());
        self.number_kind = NumberKind::Int;
    }
}
