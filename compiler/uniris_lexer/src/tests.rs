#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_empty_source_is_single_eof() {
    let tokens = scan("").unwrap();
    assert_eq!(tokens, vec![Token::eof(1)]);
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("(){}+-*.,;/"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_one_and_two_char_operators() {
    assert_eq!(
        kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comment_runs_to_end_of_line() {
    let tokens = scan("a // b c (\nd").unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["a", "d", ""]);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(kinds("x // trailing"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_keywords() {
    assert_eq!(
        kinds("if else while for or and true false function print return transaction contract"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Or,
            TokenKind::And,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Function,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Transaction,
            TokenKind::Contract,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifiers_that_look_like_keywords() {
    assert_eq!(
        kinds("iff _if printer For a_1"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_literal() {
    let tokens = scan("\"hello\"").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[0].literal, Some(Literal::String("hello".into())));
}

#[test]
fn test_string_has_no_escapes() {
    let tokens = scan(r#""a\n""#).unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::String("a\\n".into())));
}

#[test]
fn test_multiline_string_increments_line_once() {
    let tokens = scan("\"a\nb\"").unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::String("a\nb".into())));
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1], Token::eof(2));
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        scan("print \"hello\nworld").unwrap_err(),
        LexError::UnterminatedString { line: 2 }
    );
}

#[test]
fn test_numbers() {
    let tokens = scan("12 3.25 0").unwrap();
    let literals: Vec<_> = tokens.iter().filter_map(|t| t.literal.clone()).collect();
    assert_eq!(
        literals,
        vec![
            Literal::Number(12.0),
            Literal::Number(3.25),
            Literal::Number(0.0)
        ]
    );
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    let tokens = scan("12.").unwrap();
    assert_eq!(tokens[0].lexeme, "12");
    assert_eq!(tokens[0].literal, Some(Literal::Number(12.0)));
    assert_eq!(tokens[1].kind, TokenKind::Dot);
}

#[test]
fn test_leading_dot_is_not_part_of_number() {
    assert_eq!(kinds(".5"), vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn test_number_overflow_is_invalid() {
    let source = format!("1{}", "0".repeat(400));
    let err = scan(&source).unwrap_err();
    assert!(matches!(err, LexError::InvalidNumber { line: 1, .. }));
}

#[test]
fn test_unexpected_character() {
    let err = scan("a = 1\nb = @").unwrap_err();
    assert_eq!(err, LexError::UnexpectedCharacter { line: 2, ch: '@' });
    assert_eq!(err.line(), 2);
    assert_eq!(err.to_string(), "Line 2: unexpected character '@'");
}

#[test]
fn test_non_ascii_outside_string_is_rejected() {
    assert_eq!(
        scan("é").unwrap_err(),
        LexError::UnexpectedCharacter { line: 1, ch: 'é' }
    );
}

#[test]
fn test_non_ascii_inside_string_is_kept() {
    let tokens = scan("\"héllo ✓\"").unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::String("héllo ✓".into())));
}

#[test]
fn test_whitespace_and_line_tracking() {
    let tokens = scan("a\r\n\tb\n\nc").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn test_keyword_lookup_rejects_out_of_range_lengths() {
    assert_eq!(keywords::lookup("a"), None);
    assert_eq!(keywords::lookup("transactions"), None);
    assert_eq!(keywords::lookup("transaction"), Some(TokenKind::Transaction));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn fragment() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("x"),
            Just("fib"),
            Just("while"),
            Just("42"),
            Just("3.5"),
            Just("\"s\""),
            Just("\"a\nb\""),
            Just("=="),
            Just("<="),
            Just("("),
            Just("}"),
            Just("/"),
            Just("// note\n"),
            Just("\n"),
            Just("\t"),
        ]
    }

    proptest! {
        #[test]
        fn stream_ends_with_exactly_one_eof(parts in proptest::collection::vec(fragment(), 0..64)) {
            let source = parts.join(" ");
            let tokens = scan(&source).unwrap();
            let eofs = tokens.iter().filter(|t| t.is_eof()).count();
            prop_assert_eq!(eofs, 1);
            prop_assert!(tokens.last().unwrap().is_eof());
        }

        #[test]
        fn lines_never_decrease(parts in proptest::collection::vec(fragment(), 0..64)) {
            let source = parts.join(" ");
            let tokens = scan(&source).unwrap();
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].line <= pair[1].line, "{} then {}", pair[0], pair[1]);
            }
            let newlines = source.matches('\n').count();
            prop_assert_eq!(tokens.last().unwrap().line, newlines + 1);
        }
    }
}
