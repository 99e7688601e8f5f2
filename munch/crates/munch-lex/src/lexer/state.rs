//! Scan states.

use crate::trie::NodeId;

/// The active state of a scan.
///
/// Exactly one state is active at a time; each input character replaces it
/// with the state returned by that state's transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexState {
    /// Between tokens. The initial state.
    ReadingSpaces,
    /// Accumulating letters. `keyword` is the position in the keyword trie
    /// while the letters so far still spell a keyword prefix.
    Word {
        /// Keyword trie position, dropped once no keyword matches.
        keyword: Option<NodeId>,
    },
    /// Accumulating digits, possibly after the decimal point.
    Number,
    /// Just read a decimal point; the next character must be a digit.
    ExpectingDigit,
    /// Accumulating operator characters along the operator trie.
    Operator {
        /// Operator trie position of the characters read so far.
        node: NodeId,
    },
}

impl LexState {
    /// Short name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            LexState::ReadingSpaces => "reading-spaces",
            LexState::Word { keyword: Some(_) } => "keyword",
            LexState::Word { keyword: None } => "word",
            LexState::Number => "number",
            LexState::ExpectingDigit => "expecting-digit",
            LexState::Operator { .. } => "operator",
        }
    }
}

impl Default for LexState {
    fn default() -> Self {
        LexState::ReadingSpaces
    }
}
