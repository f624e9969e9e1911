//! Lexer error types.

use thiserror::Error;

/// A lexical error. Scanning stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// End of input reached before the closing `"`.
    #[error("Line {line}: unterminated string")]
    UnterminatedString { line: usize },

    /// A character that starts no token.
    #[error("Line {line}: unexpected character '{ch}'")]
    UnexpectedCharacter { line: usize, ch: char },

    /// A digit run that does not fit the number representation.
    #[error("Line {line}: invalid number literal '{lexeme}'")]
    InvalidNumber { line: usize, lexeme: String },
}

impl LexError {
    /// Source line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedString { line }
            | LexError::UnexpectedCharacter { line, .. }
            | LexError::InvalidNumber { line, .. } => *line,
        }
    }
}
