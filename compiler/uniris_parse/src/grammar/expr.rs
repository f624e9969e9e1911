//! Expression parsing.
//!
//! Precedence, lowest to highest: assignment, `or`, `and`, equality,
//! comparison, additive, multiplicative, unary, call, primary. Every binary
//! level is left-associative; assignment and unary are right-associative.

use uniris_ir::{BinaryOp, Expr, Literal, LogicalOp, TokenKind, UnaryOp};
use uniris_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `or ( "=" assignment )?`
    ///
    /// A bare `name = value` is already folded into an assignment by
    /// `parse_primary`; this level handles targets that reach `=` wrapped
    /// in parentheses, and rejects everything else.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_or()?;

        if self.cursor.check(TokenKind::Equal) {
            let equals = self.cursor.advance();
            let value = self.parse_expr()?;
            return match target.assignment_target() {
                Some((name, line)) => Ok(Expr::assign(name, value, line)),
                None => Err(ParseError::at(equals, "Invalid assignment target.")),
            };
        }

        Ok(target)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.cursor.eat(TokenKind::Or) {
            let right = self.parse_and()?;
            left = Expr::logical(left, LogicalOp::Or, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.cursor.eat(TokenKind::And) {
            let right = self.parse_equality()?;
            left = Expr::logical(left, LogicalOp::And, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        while let Some(op) = self.match_equality_op() {
            let line = self.cursor.advance().line;
            let right = self.parse_comparison()?;
            left = Expr::binary(left, op, right, line);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            let line = self.cursor.advance().line;
            let right = self.parse_additive()?;
            left = Expr::binary(left, op, right, line);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            let line = self.cursor.advance().line;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right, line);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            let line = self.cursor.advance().line;
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, right, line);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let line = self.cursor.advance().line;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, operand, line));
        }
        self.parse_call()
    }

    /// `primary ( "(" arguments? ")" )*`
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.cursor.eat(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self
            .cursor
            .expect(TokenKind::RightParen, "Expected ')' after arguments")?;
        Ok(Expr::call(callee, args, paren.line))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::bool(false))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::bool(true))
            }
            TokenKind::Number | TokenKind::String => {
                self.cursor.advance();
                let literal = token.literal.clone().unwrap_or(Literal::Nil);
                Ok(Expr::Literal(literal))
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                if self.cursor.eat(TokenKind::Equal) {
                    let value = self.parse_expr()?;
                    return Ok(Expr::assign(token.lexeme.as_str(), value, token.line));
                }
                Ok(Expr::variable(token.lexeme.as_str(), token.line))
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after expression")?;
                Ok(Expr::grouping(inner))
            }
            _ => Err(ParseError::at(token, "Expected expression")),
        }
    }

    // ─── Operator matching ─────────────────────────────────────────────

    fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
