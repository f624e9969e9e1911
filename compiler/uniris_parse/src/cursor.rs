//! Token cursor for navigating the token stream.

use tracing::trace;
use uniris_ir::{Token, TokenKind};

use crate::ParseError;

/// Stands in for the terminating token when a stream was built without one.
static END: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: None,
    line: 0,
};

/// Cursor over a borrowed token slice.
///
/// The position never moves past the first `Eof` token, so `current()` is
/// always a real token of the stream (or [`END`] for an empty slice).
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> &'a Token {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&END)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches the given kind.
    ///
    /// Always `false` at end of input.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_kind() == kind
    }

    /// Consume the current token and return it. Does nothing at end of input.
    pub fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            let token = self.current();
            trace!(
                pos = self.pos,
                kind = %token.kind.display_name(),
                line = token.line,
                "advance"
            );
            self.pos += 1;
        }
        self.previous()
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind, or fail with `message`.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::at(self.current(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Identifier, "a", 1),
            Token::new(TokenKind::Plus, "+", 1),
            Token::eof(2),
        ]
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let tokens = tokens();
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.advance().lexeme, "a");
        assert_eq!(cursor.advance().lexeme, "+");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_previous_before_any_advance() {
        let tokens = tokens();
        let cursor = Cursor::new(&tokens);
        assert!(cursor.previous().is_eof());
    }

    #[test]
    fn test_check_is_false_at_end() {
        let tokens = vec![Token::eof(1)];
        let cursor = Cursor::new(&tokens);
        assert!(!cursor.check(TokenKind::Eof));
    }

    #[test]
    fn test_expect_reports_current_token() {
        let tokens = tokens();
        let mut cursor = Cursor::new(&tokens);
        let err = cursor.expect(TokenKind::LeftParen, "Expect '('").unwrap_err();
        assert_eq!(err.to_string(), "Parsing error at a of line 1 - Expect '('");
    }

    #[test]
    fn test_empty_slice_behaves_like_end() {
        let mut cursor = Cursor::new(&[]);
        assert!(cursor.is_at_end());
        assert!(cursor.advance().is_eof());
    }
}
