//! Character classification.
//!
//! Every input character is mapped to a [`CharClass`] before the lexer
//! decides what to do with it. Classes are checked in a fixed order:
//! whitespace, ASCII letter, ASCII digit, `.`, and finally membership in the
//! operator-character set derived from the configured operators. A character
//! that falls through all of them is [`CharClass::Unknown`].

use std::fmt;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::Serialize;

/// Semantic class of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// Any Unicode whitespace.
    Whitespace,
    /// `a-z` or `A-Z`.
    Letter,
    /// `0-9`.
    Digit,
    /// The decimal point `.`.
    Dot,
    /// A character that appears in at least one configured operator.
    Operator,
    /// None of the above.
    Unknown,
}

impl CharClass {
    /// Classes that do not depend on the operator vocabulary.
    ///
    /// Returns `None` for characters that are either operator characters or
    /// unknown, which only a [`CharClassifier`] can tell apart.
    pub fn fixed(c: char) -> Option<CharClass> {
        if c.is_whitespace() {
            Some(CharClass::Whitespace)
        } else if c.is_ascii_alphabetic() {
            Some(CharClass::Letter)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if c == '.' {
            Some(CharClass::Dot)
        } else {
            None
        }
    }

    /// Human-readable name used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            CharClass::Whitespace => "whitespace",
            CharClass::Letter => "letter",
            CharClass::Digit => "digit",
            CharClass::Dot => "decimal point",
            CharClass::Operator => "operator",
            CharClass::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Classifier holding the operator-character set for one vocabulary.
///
/// The set is computed once, from every character of every operator, in
/// first-seen order with duplicates collapsed.
#[derive(Clone, Debug, Default)]
pub struct CharClassifier {
    operator_chars: IndexSet<char, FxBuildHasher>,
}

impl CharClassifier {
    /// Builds the classifier from the operator lexemes.
    ///
    /// # Example
    ///
    /// ```
    /// use munch_lex::classify::{CharClass, CharClassifier};
    ///
    /// let classifier = CharClassifier::new(["==", "<="]);
    /// assert_eq!(classifier.classify('<'), CharClass::Operator);
    /// assert_eq!(classifier.classify('>'), CharClass::Unknown);
    /// assert_eq!(classifier.operator_chars().collect::<String>(), "=<");
    /// ```
    pub fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut operator_chars = IndexSet::default();
        for operator in operators {
            operator_chars.extend(operator.as_ref().chars());
        }
        Self { operator_chars }
    }

    /// Maps a character to its class.
    #[inline]
    pub fn classify(&self, c: char) -> CharClass {
        CharClass::fixed(c).unwrap_or_else(|| {
            if self.operator_chars.contains(&c) {
                CharClass::Operator
            } else {
                CharClass::Unknown
            }
        })
    }

    /// The operator characters in first-seen order.
    pub fn operator_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.operator_chars.iter().copied()
    }
}
