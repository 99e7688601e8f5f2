//! Keyword and operator configuration.
//!
//! A [`Vocabulary`] is plain configuration data: two ordered lists of
//! literal strings. [`Lexicon::new`] validates it and compiles it into the
//! classifier and the two tries the lexer runs against.

use serde::{Deserialize, Serialize};

use crate::classify::{CharClass, CharClassifier};
use crate::error::{Found, LexResult, TrieError, VocabularyError, VocabularyList};
use crate::lexer::Lexer;
use crate::token::Token;
use crate::trie::PrefixTrie;

/// Keywords recognized when no vocabulary is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "in", "return", "fn", "let", "const", "true", "false", "and",
    "or", "not", "break", "continue",
];

/// Operators recognized when no vocabulary is configured.
pub const DEFAULT_OPERATORS: &[&str] = &[
    "=", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "%", "+=", "-=", "*=", "/=", "->",
    "&&", "||", "!", "(", ")", "{", "}", "[", "]", ",", ";", ":",
];

/// The keyword and operator lists.
///
/// When deserialized, a missing list falls back to the default one; write an
/// explicit empty list to disable keywords or operators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Words that lex as [`TokenKind::Keyword`](crate::TokenKind::Keyword).
    pub keywords: Vec<String>,
    /// Operator lexemes, matched longest-first.
    pub operators: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEYWORDS.iter().copied(),
            DEFAULT_OPERATORS.iter().copied(),
        )
    }
}

impl Vocabulary {
    /// Creates a vocabulary from any lists of strings.
    pub fn new<K, O>(keywords: K, operators: O) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            operators: operators.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks that every entry can actually be produced by the lexer.
    ///
    /// Keywords must be non-empty runs of ASCII letters. Operators must be
    /// non-empty and must not contain whitespace, letters, digits or `.`,
    /// because those characters are classified before the operator class.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for (index, keyword) in self.keywords.iter().enumerate() {
            if keyword.is_empty() {
                return Err(VocabularyError::EmptyEntry {
                    list: VocabularyList::Keywords,
                    index,
                });
            }
            if let Some(c) = keyword.chars().find(|c| !c.is_ascii_alphabetic()) {
                return Err(VocabularyError::InvalidKeyword {
                    keyword: keyword.clone(),
                    found: Found::Char(c),
                });
            }
        }

        for (index, operator) in self.operators.iter().enumerate() {
            if operator.is_empty() {
                return Err(VocabularyError::EmptyEntry {
                    list: VocabularyList::Operators,
                    index,
                });
            }
            for c in operator.chars() {
                if let Some(class) = CharClass::fixed(c) {
                    return Err(VocabularyError::UnreachableOperator {
                        operator: operator.clone(),
                        found: Found::Char(c),
                        class,
                    });
                }
            }
        }

        Ok(())
    }
}

/// A compiled vocabulary: the operator-character classifier plus the
/// keyword and operator tries.
///
/// A `Lexicon` is immutable once built and can be shared by reference across
/// any number of concurrent scans.
///
/// # Example
///
/// ```
/// use munch_lex::{Lexicon, TokenKind, Vocabulary};
///
/// let lexicon = Lexicon::new(&Vocabulary::new(["if"], ["=="])).unwrap();
/// let tokens = lexicon.tokenize("if x == 1").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Keyword, TokenKind::Word, TokenKind::Operator, TokenKind::Int]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lexicon {
    classifier: CharClassifier,
    keywords: PrefixTrie,
    operators: PrefixTrie,
}

impl Lexicon {
    /// Validates `vocabulary` and builds the classifier and both tries.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, VocabularyError> {
        vocabulary.validate()?;

        let keywords = PrefixTrie::build(&vocabulary.keywords)
            .map_err(|err| empty_entry(VocabularyList::Keywords, err))?;
        let operators = PrefixTrie::build(&vocabulary.operators)
            .map_err(|err| empty_entry(VocabularyList::Operators, err))?;
        let classifier = CharClassifier::new(&vocabulary.operators);

        tracing::debug!(
            keywords = keywords.word_count(),
            operators = operators.word_count(),
            operator_chars = classifier.operator_chars().count(),
            "built lexicon"
        );

        Ok(Self {
            classifier,
            keywords,
            operators,
        })
    }

    /// The character classifier.
    pub fn classifier(&self) -> &CharClassifier {
        &self.classifier
    }

    /// The keyword trie.
    pub fn keywords(&self) -> &PrefixTrie {
        &self.keywords
    }

    /// The operator trie.
    pub fn operators(&self) -> &PrefixTrie {
        &self.operators
    }

    /// Classifies one character against this vocabulary.
    #[inline]
    pub fn classify(&self, c: char) -> CharClass {
        self.classifier.classify(c)
    }

    /// Tokenizes `text` in a single pass.
    ///
    /// Returns every token in input order, or the first fatal error. Tokens
    /// completed before the error are discarded.
    #[tracing::instrument(level = "debug", skip(self, text), fields(bytes = text.len()))]
    pub fn tokenize(&self, text: &str) -> LexResult<Vec<Token>> {
        let result = Lexer::new(self, text).tokenize();
        match &result {
            Ok(tokens) => tracing::debug!(tokens = tokens.len(), "tokenized"),
            Err(err) => tracing::debug!(code = err.code(), error = %err, "scan aborted"),
        }
        result
    }
}

fn empty_entry(list: VocabularyList, err: TrieError) -> VocabularyError {
    match err {
        TrieError::EmptyWord { index } => VocabularyError::EmptyEntry { list, index },
    }
}
