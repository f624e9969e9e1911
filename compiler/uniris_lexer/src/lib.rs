//! Lexer for Uniris.
//!
//! A single left-to-right pass over Unicode scalar values. Each token class
//! has its own scanning method; the dispatcher in [`Scanner::scan_token`]
//! only looks at the first character.
//!
//! The stream always ends with exactly one `Eof` token carrying the final
//! line number. Scanning stops at the first [`LexError`].

mod keywords;
mod lex_error;

use tracing::trace;
use uniris_ir::{Literal, Token, TokenKind};

pub use lex_error::LexError;

/// Scan `source` into a token stream.
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).scan_tokens()
}

/// Character-level scanner state.
pub struct Scanner {
    source: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Consume the scanner and produce the full token stream.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens.push(Token::eof(self.line));
        trace!(count = self.tokens.len(), line = self.line, "scan complete");
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = self.advance();
        match c {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '.' => self.single(TokenKind::Dot),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '!' => self.one_or_two(TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.one_or_two(TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.one_or_two(TokenKind::Less, TokenKind::LessEqual),
            '>' => self.one_or_two(TokenKind::Greater, TokenKind::GreaterEqual),
            '/' => self.slash_or_comment(),
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => return self.string(),
            c if c.is_ascii_digit() => return self.number(),
            c if is_ident_start(c) => self.identifier(),
            ch => {
                return Err(LexError::UnexpectedCharacter {
                    line: self.line,
                    ch,
                })
            }
        }
        Ok(())
    }

    // ─── Operators ─────────────────────────────────────────────────────

    fn single(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    /// `x` or `x=`: every two-character operator ends in `=`.
    fn one_or_two(&mut self, one: TokenKind, two: TokenKind) {
        let kind = if self.eat('=') { two } else { one };
        self.push(kind, None);
    }

    fn slash_or_comment(&mut self) {
        if self.eat('/') {
            while self.peek() != Some('\n') && !self.is_at_end() {
                self.advance();
            }
        } else {
            self.push(TokenKind::Slash, None);
        }
    }

    // ─── Literals ──────────────────────────────────────────────────────

    /// String body up to the closing quote. No escapes; embedded newlines
    /// are kept and counted.
    fn string(&mut self) -> Result<(), LexError> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString { line: self.line });
        }

        // closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.push(TokenKind::String, Some(Literal::String(value)));
        Ok(())
    }

    /// Digits with an optional fraction. The `.` is only part of the number
    /// when a digit follows it, so `12.` scans as `12` then `.`.
    fn number(&mut self) -> Result<(), LexError> {
        self.eat_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.eat_digits();
        }

        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                self.push(TokenKind::Number, Some(Literal::Number(value)));
                Ok(())
            }
            _ => Err(LexError::InvalidNumber {
                line: self.line,
                lexeme,
            }),
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let kind = keywords::lookup(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.push(kind, None);
    }

    #[inline]
    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    // ─── Cursor ────────────────────────────────────────────────────────

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    #[inline]
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    /// Consume the next character if it is `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let mut token = Token::new(kind, self.lexeme(), self.line);
        token.literal = literal;
        trace!(?kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests;
