//! Operator scanning.
//!
//! Operators are matched longest-first along the operator trie with no
//! backtracking. When the next operator character cannot extend the current
//! path, the characters read so far must already form a complete operator;
//! the scan never falls back to a shorter prefix. With operators `<` and
//! `<<=`, the input `<<` is therefore an error rather than `<` `<`.

use super::state::LexState;
use crate::classify::CharClass;
use crate::error::{Found, LexError, LexResult, OperatorDefect};
use crate::token::TokenKind;
use crate::trie::NodeId;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Starts an operator at operator character `c`.
    ///
    /// Fails if no configured operator begins with `c`.
    pub(super) fn begin_operator(&mut self, c: char) -> LexResult<LexState> {
        match self.lexicon.operators().start(c) {
            Some(node) => {
                self.start_token(c);
                Ok(LexState::Operator { node })
            },
            None => Err(self.invalid_operator(OperatorDefect::NoOperatorStartsWith, Found::Char(c))),
        }
    }

    pub(super) fn reading_operator(
        &mut self,
        node: NodeId,
        c: char,
        class: CharClass,
    ) -> LexResult<LexState> {
        match class {
            CharClass::Operator => match self.lexicon.operators().step(node, c) {
                Some(next) => {
                    self.current.push(c);
                    Ok(LexState::Operator { node: next })
                },
                None => {
                    self.finish_operator(node, Found::Char(c))?;
                    self.begin_operator(c)
                },
            },
            CharClass::Whitespace => {
                self.finish_operator(node, Found::Char(c))?;
                Ok(LexState::ReadingSpaces)
            },
            CharClass::Letter => {
                self.finish_operator(node, Found::Char(c))?;
                Ok(self.begin_word(c))
            },
            CharClass::Digit => {
                self.finish_operator(node, Found::Char(c))?;
                Ok(self.begin_number(c))
            },
            CharClass::Dot | CharClass::Unknown => Err(self.reject(c, class)),
        }
    }

    /// Emits the operator if `node` completes one, otherwise fails with the
    /// accumulated characters as context.
    pub(super) fn finish_operator(&mut self, node: NodeId, found: Found) -> LexResult<()> {
        if self.lexicon.operators().is_terminal(node) {
            self.emit(TokenKind::Operator);
            Ok(())
        } else {
            Err(self.invalid_operator(OperatorDefect::Incomplete, found))
        }
    }

    fn invalid_operator(&self, defect: OperatorDefect, found: Found) -> LexError {
        LexError::InvalidOperator {
            defect,
            found,
            context: self.current.clone(),
            span: self.cursor.current_span(),
        }
    }
}
