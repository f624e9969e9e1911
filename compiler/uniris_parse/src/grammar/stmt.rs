//! Statement parsing.
//!
//! Statements have no terminator; each one ends where its last expression
//! ends. `for` loops are desugared into `while` here, so later stages never
//! see them.

use tracing::debug;
use uniris_ir::{Expr, Stmt, TokenKind};
use uniris_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Function => {
                self.cursor.advance();
                self.parse_function()
            }
            TokenKind::For => {
                self.cursor.advance();
                self.parse_for()
            }
            TokenKind::If => {
                self.cursor.advance();
                self.parse_if()
            }
            TokenKind::Print => {
                self.cursor.advance();
                Ok(Stmt::Print(self.parse_expr()?))
            }
            TokenKind::Return => {
                let line = self.cursor.advance().line;
                let value = self.parse_expr()?;
                Ok(Stmt::Return { value, line })
            }
            TokenKind::While => {
                self.cursor.advance();
                let condition = self.parse_expr()?;
                let body = self.parse_statement()?;
                Ok(Stmt::while_loop(condition, body))
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.parse_block()?))
            }
            _ => Ok(Stmt::Expression(self.parse_expr()?)),
        }
    }

    /// `function name(a, b) { ... }`, after the `function` keyword.
    fn parse_function(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expect function name")?;
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after function name")?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                let param = self
                    .cursor
                    .expect(TokenKind::Identifier, "Expect parameter name")?;
                params.push(param.lexeme.clone());
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after parameters")?;
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' before function body")?;
        let body = self.parse_block()?;

        debug!(name = %name.lexeme, arity = params.len(), "parsed function");
        Ok(Stmt::function(name.lexeme.as_str(), params, body, name.line))
    }

    /// `for init; condition; increment body`, after the `for` keyword.
    ///
    /// Becomes `{ init while condition { body increment } }`. A missing
    /// condition is `true`; the block around the loop only exists when there
    /// is an initializer, and the block around the body only when there is an
    /// increment.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let initializer = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Stmt::Expression(self.parse_expr()?))
        };
        self.cursor
            .expect(TokenKind::Semicolon, "Expected ; after loop initializer")?;

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            Expr::bool(true)
        } else {
            self.parse_expr()?
        };
        self.cursor
            .expect(TokenKind::Semicolon, "Expected ; after loop condition")?;

        let increment = if self.cursor.check(TokenKind::LeftBrace) {
            None
        } else {
            Some(self.parse_expr()?)
        };

        let mut body = self.parse_statement()?;
        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let mut lowered = Stmt::while_loop(condition, body);
        if let Some(initializer) = initializer {
            lowered = Stmt::Block(vec![initializer, lowered]);
        }
        Ok(lowered)
    }

    /// `if condition then (else otherwise)?`, after the `if` keyword.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let condition = self.parse_expr()?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(Stmt::if_else(condition, then_branch, else_branch))
    }

    /// Statements up to the closing `}`, after the opening `{`.
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.cursor
            .expect(TokenKind::RightBrace, "Expect } after block")?;
        Ok(statements)
    }
}
