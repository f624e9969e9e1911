//! Token types for the Uniris lexer.
//!
//! A token is produced once by the lexer and consumed left-to-right by the
//! parser. It keeps the raw lexeme for diagnostics and, for literals, the
//! already-decoded value.

use std::fmt;

/// Token kinds for Uniris.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Plus,
    Minus,
    Star,
    Slash,
    Dot,
    Comma,
    Semicolon,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    If,
    Else,
    While,
    For,
    Or,
    And,
    True,
    False,
    Function,
    Print,
    Return,
    Transaction,
    Contract,

    Eof,
}

impl TokenKind {
    /// Human-readable name used in token dumps and diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Transaction => "TRANSACTION",
            TokenKind::Contract => "CONTRACT",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns `true` for the reserved words of the language.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Or
                | TokenKind::And
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Function
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Transaction
                | TokenKind::Contract
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A literal value decoded at scan time (or synthesized by the parser).
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::String(s) => write!(f, "{s:?}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => f.write_str("nil"),
        }
    }
}

/// A classified lexical unit.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text the token was scanned from. Empty for `Eof`.
    pub lexeme: String,
    /// Decoded value for `Number` and `String` tokens.
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line: usize,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Attach a decoded literal value.
    #[must_use]
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// The end-of-file token that terminates every token stream.
    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {}", self.line, self.kind)?;
        if !self.lexeme.is_empty() {
            write!(f, " '{}'", self.lexeme)?;
        }
        if let Some(literal) = &self.literal {
            write!(f, " = {literal}")?;
        }
        Ok(())
    }
}
