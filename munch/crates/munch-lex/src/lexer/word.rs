//! Word and keyword scanning.
//!
//! A word is a run of ASCII letters. While the letters read so far are a
//! prefix of some keyword the state carries a keyword-trie position; once
//! they are not, the position is dropped and the rest of the word is
//! accumulated untracked. The word is a keyword only if the position is
//! still present and terminal when the word ends.

use super::state::LexState;
use crate::classify::CharClass;
use crate::error::LexResult;
use crate::token::TokenKind;
use crate::trie::NodeId;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Starts a word at letter `c`.
    pub(super) fn begin_word(&mut self, c: char) -> LexState {
        self.start_token(c);
        LexState::Word {
            keyword: self.lexicon.keywords().start(c),
        }
    }

    pub(super) fn reading_word(
        &mut self,
        keyword: Option<NodeId>,
        c: char,
        class: CharClass,
    ) -> LexResult<LexState> {
        match class {
            CharClass::Letter => {
                self.current.push(c);
                let keyword = keyword.and_then(|node| self.lexicon.keywords().step(node, c));
                Ok(LexState::Word { keyword })
            },
            CharClass::Whitespace => {
                self.finish_word(keyword);
                Ok(LexState::ReadingSpaces)
            },
            CharClass::Operator => {
                self.finish_word(keyword);
                self.begin_operator(c)
            },
            CharClass::Digit | CharClass::Dot | CharClass::Unknown => Err(self.reject(c, class)),
        }
    }

    /// Emits the word as `Keyword` or `Word`.
    pub(super) fn finish_word(&mut self, keyword: Option<NodeId>) {
        let is_keyword = keyword.is_some_and(|node| self.lexicon.keywords().is_terminal(node));
        self.emit(if is_keyword {
            TokenKind::Keyword
        } else {
            TokenKind::Word
        });
    }
}
