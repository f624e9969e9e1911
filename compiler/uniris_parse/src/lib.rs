//! Recursive descent parser for Uniris.
//!
//! Turns a token stream into a program (a list of statements). Parsing
//! stops at the first error.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{Found, ParseError};

use tracing::debug;
use uniris_ir::{Stmt, Token};

/// Parse a complete token stream into a program.
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        debug!(statements = statements.len(), "parsed program");
        Ok(statements)
    }
}
