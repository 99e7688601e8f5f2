//! Edge case tests for munch-lex

#[cfg(test)]
mod tests {
    use crate::{Found, LexError, Lexicon, OperatorDefect, Token, TokenKind, Vocabulary};

    fn lexicon() -> Lexicon {
        Lexicon::new(&Vocabulary::default()).unwrap()
    }

    fn lex_all(source: &str) -> Vec<Token> {
        lexicon().tokenize(source).unwrap()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_only_whitespace() {
        assert!(lex_all("   \t\t\n\r\n   ").is_empty());
    }

    #[test]
    fn test_edge_single_letter() {
        assert_eq!(kinds("x"), vec![TokenKind::Word]);
    }

    #[test]
    fn test_edge_single_digit() {
        assert_eq!(kinds("0"), vec![TokenKind::Int]);
    }

    #[test]
    fn test_edge_single_operator() {
        assert_eq!(kinds("+"), vec![TokenKind::Operator]);
    }

    #[test]
    fn test_edge_end_of_input_in_every_accepting_state() {
        assert_eq!(kinds("if"), vec![TokenKind::Keyword]);
        assert_eq!(kinds("iff"), vec![TokenKind::Word]);
        assert_eq!(kinds("12"), vec![TokenKind::Int]);
        assert_eq!(kinds("1.2"), vec![TokenKind::Float]);
        assert_eq!(kinds("<="), vec![TokenKind::Operator]);
    }

    #[test]
    fn test_edge_end_of_input_after_decimal_point() {
        let err = lexicon().tokenize("x = 10.").unwrap_err();
        assert_eq!(err.found(), Found::EndOfInput);
        assert_eq!(err.context(), "10.");
    }

    #[test]
    fn test_edge_end_of_input_in_incomplete_operator() {
        let vocabulary = Vocabulary::new(["if"], ["->"]);
        let lexicon = Lexicon::new(&vocabulary).unwrap();
        let err = lexicon.tokenize("a -").unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidOperator {
                defect: OperatorDefect::Incomplete,
                found: Found::EndOfInput,
                ..
            }
        ));
    }

    #[test]
    fn test_edge_long_word() {
        let name = "a".repeat(10_000);
        let tokens = lex_all(&format!("let {} = 1", name));
        assert_eq!(tokens[1].value, name);
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[2].span.column, 10_006);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(500);
        let source = format!("{}.{}", digits, digits);
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, source);
        assert_eq!(tokens[0].kind, TokenKind::Float);
    }

    #[test]
    fn test_edge_keyword_as_prefix_of_keyword() {
        // "in" is a keyword, "int" is not
        assert_eq!(kinds("in int"), vec![TokenKind::Keyword, TokenKind::Word]);
    }

    #[test]
    fn test_edge_non_ascii_letter_is_unclassifiable() {
        let err = lexicon().tokenize("caf\u{e9}").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnclassifiableCharacter {
                found: Found::Char('\u{e9}'),
                ..
            }
        ));
        assert_eq!(err.context(), "caf");
        assert_eq!(err.span().column, 4);
        assert_eq!(err.span().len(), 2);
    }

    #[test]
    fn test_edge_non_ascii_digit_is_unclassifiable() {
        // Arabic-Indic digit three
        let err = lexicon().tokenize("\u{663}").unwrap_err();
        assert!(matches!(err, LexError::UnclassifiableCharacter { .. }));
    }

    #[test]
    fn test_edge_unicode_whitespace_separates() {
        assert_eq!(
            kinds("a\u{a0}b\u{2003}1"),
            vec![TokenKind::Word, TokenKind::Word, TokenKind::Int]
        );
    }

    #[test]
    fn test_edge_columns_count_characters() {
        let tokens = lex_all("\u{2003}\u{2003}x");
        assert_eq!(tokens[0].span.column, 3);
        assert_eq!(tokens[0].span.start, 6);
    }

    #[test]
    fn test_edge_tabs_and_crlf() {
        let tokens = lex_all("let\tx\r\n=\r\n1");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].span.line, 2);
        assert_eq!(tokens[3].span.line, 3);
        assert_eq!(tokens[3].span.column, 1);
    }

    #[test]
    fn test_edge_error_on_last_line() {
        let err = lexicon().tokenize("a\nb\nc ?").unwrap_err();
        assert_eq!(err.span().line, 3);
        assert_eq!(err.span().column, 3);
    }

    #[test]
    fn test_edge_no_space_between_word_and_operator() {
        assert_eq!(
            kinds("x+=y"),
            vec![TokenKind::Word, TokenKind::Operator, TokenKind::Word]
        );
    }

    #[test]
    fn test_edge_empty_vocabulary() {
        let lexicon = Lexicon::new(&Vocabulary::new(
            Vec::<String>::new(),
            Vec::<String>::new(),
        ))
        .unwrap();
        let tokens = lexicon.tokenize("if 1 2.5").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Word, TokenKind::Int, TokenKind::Float]
        );
        assert!(lexicon.tokenize("a+b").is_err());
    }

    #[test]
    fn test_edge_duplicate_vocabulary_entries() {
        let lexicon = Lexicon::new(&Vocabulary::new(["if", "if"], ["+", "+"])).unwrap();
        assert_eq!(lexicon.keywords().word_count(), 1);
        assert_eq!(lexicon.tokenize("if+").unwrap().len(), 2);
    }
}
