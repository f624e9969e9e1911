//! Parse error type.
//!
//! Parsing stops at the first error; there is no recovery. The error names
//! the line and the offending lexeme (or end of input) together with what
//! the parser expected there.

use std::fmt;

use thiserror::Error;
use uniris_ir::Token;

/// What the parser found where the error was detected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Found {
    /// The raw text of the offending token.
    Lexeme(String),
    /// The token stream ran out.
    End,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Lexeme(lexeme) => f.write_str(lexeme),
            Found::End => f.write_str("end"),
        }
    }
}

/// A parse error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("Parsing error at {found} of line {line} - {message}")]
pub struct ParseError {
    pub line: usize,
    pub found: Found,
    pub message: String,
}

impl ParseError {
    /// Build an error located at `token`.
    #[cold]
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        let found = if token.is_eof() {
            Found::End
        } else {
            Found::Lexeme(token.lexeme.clone())
        };
        ParseError {
            line: token.line,
            found,
            message: message.into(),
        }
    }
}
