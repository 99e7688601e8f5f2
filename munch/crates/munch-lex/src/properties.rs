//! Property-based tests for munch-lex

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Lexicon, Token, TokenKind, Vocabulary, DEFAULT_OPERATORS};

    fn lexicon() -> Lexicon {
        Lexicon::new(&Vocabulary::default()).unwrap()
    }

    /// One lexeme together with the kind it must lex as on its own.
    fn lexeme() -> impl Strategy<Value = (String, TokenKind)> {
        let keywords: Vec<String> = crate::DEFAULT_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        prop_oneof![
            "[a-zA-Z]{1,12}".prop_map(|w| (w, TokenKind::Word)),
            prop::sample::select(keywords).prop_map(|k| (k, TokenKind::Keyword)),
            "[0-9]{1,12}".prop_map(|n| (n, TokenKind::Int)),
            "[0-9]{1,6}\\.[0-9]{1,6}".prop_map(|f| (f, TokenKind::Float)),
            prop::sample::select(DEFAULT_OPERATORS)
                .prop_map(|o| (o.to_string(), TokenKind::Operator)),
        ]
    }

    fn expected_kind(lexicon: &Lexicon, value: &str, kind: TokenKind) -> TokenKind {
        // generated words can collide with keywords
        if kind == TokenKind::Word && lexicon.keywords().contains(value) {
            TokenKind::Keyword
        } else {
            kind
        }
    }

    fn values(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::value).collect()
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_letter_runs_are_words_or_keywords() {
        let lexicon = lexicon();
        proptest!(|(input in "[a-zA-Z]{1,40}")| {
            let tokens = lexicon.tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].value, &input);
            let expected = if lexicon.keywords().contains(&input) {
                TokenKind::Keyword
            } else {
                TokenKind::Word
            };
            prop_assert_eq!(tokens[0].kind, expected);
        });
    }

    #[test]
    fn test_property_digit_runs_are_ints() {
        let lexicon = lexicon();
        proptest!(|(input in "[0-9]{1,40}")| {
            let tokens = lexicon.tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Int);
            prop_assert_eq!(&tokens[0].value, &input);
        });
    }

    #[test]
    fn test_property_decimal_literals_are_floats() {
        let lexicon = lexicon();
        proptest!(|(input in "[0-9]{1,20}\\.[0-9]{1,20}")| {
            let tokens = lexicon.tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Float);
        });
    }

    #[test]
    fn test_property_trailing_dot_always_fails() {
        let lexicon = lexicon();
        proptest!(|(input in "[0-9]{1,20}\\.")| {
            let err = lexicon.tokenize(&input).unwrap_err();
            prop_assert_eq!(err.code(), "L0002");
            prop_assert_eq!(err.context(), input.as_str());
        });
    }

    #[test]
    fn test_property_space_separated_lexemes_lex_back() {
        let lexicon = lexicon();
        proptest!(|(lexemes in prop::collection::vec(lexeme(), 0..24), sep in "[ \t\n]{1,3}")| {
            let source = lexemes
                .iter()
                .map(|(value, _)| value.as_str())
                .collect::<Vec<_>>()
                .join(&sep);
            let tokens = lexicon.tokenize(&source).unwrap();
            prop_assert_eq!(tokens.len(), lexemes.len());
            for (token, (value, kind)) in tokens.iter().zip(&lexemes) {
                prop_assert_eq!(&token.value, value);
                prop_assert_eq!(token.kind, expected_kind(&lexicon, value, *kind));
            }
        });
    }

    #[test]
    fn test_property_relexing_is_stable() {
        let lexicon = lexicon();
        proptest!(|(lexemes in prop::collection::vec(lexeme(), 1..24))| {
            // adjacent operators may merge, so lex once and compare the
            // second pass against the first
            let source: String = lexemes.iter().map(|(value, _)| value.as_str()).collect();
            if let Ok(first) = lexicon.tokenize(&source) {
                let joined = values(&first).join(" ");
                let second = lexicon.tokenize(&joined).unwrap();
                prop_assert_eq!(&first.iter().map(Token::as_pair).collect::<Vec<_>>(),
                                &second.iter().map(Token::as_pair).collect::<Vec<_>>());
            }
        });
    }

    #[test]
    fn test_property_spans_slice_their_lexemes() {
        let lexicon = lexicon();
        proptest!(|(input in "[a-z0-9 .+=<>!(){}\n]{0,80}")| {
            if let Ok(tokens) = lexicon.tokenize(&input) {
                for token in &tokens {
                    prop_assert_eq!(&input[token.span.start..token.span.end], token.value.as_str());
                }
                let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
                prop_assert_eq!(values(&tokens).concat(), stripped);
            }
        });
    }

    #[test]
    fn test_property_operators_are_maximal() {
        let lexicon = lexicon();
        proptest!(|(input in "[=<>!+*/%-]{1,12}")| {
            if let Ok(tokens) = lexicon.tokenize(&input) {
                // no emitted operator could have absorbed the next one's
                // first character
                for pair in tokens.windows(2) {
                    let mut extended = pair[0].value.clone();
                    extended.extend(pair[1].value.chars().next());
                    prop_assert!(lexicon.operators().walk(&extended).is_none());
                }
            }
        });
    }

    #[test]
    fn test_property_arbitrary_input_never_panics() {
        let lexicon = lexicon();
        proptest!(|(input in "\\PC{0,100}")| {
            match lexicon.tokenize(&input) {
                Ok(tokens) => prop_assert!(tokens.iter().all(|t| !t.value.is_empty())),
                Err(err) => prop_assert!(err.is_input_error()),
            }
        });
    }
}
