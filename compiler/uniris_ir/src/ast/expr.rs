//! Expression nodes.

use super::{BinaryOp, LogicalOp, UnaryOp};
use crate::Literal;

/// An expression.
///
/// Variants that can fail at runtime carry the source line of the token
/// that introduced them, so evaluation errors can point back at the source.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// `42`, `"text"`, `true`, `false`
    Literal(Literal),
    /// A name lookup.
    Variable { name: String, line: usize },
    /// `name = value`
    Assign {
        name: String,
        value: Box<Expr>,
        line: usize,
    },
    /// `( expr )`
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        line: usize,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
        line: usize,
    },
    /// `and` / `or`
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    /// `callee(args...)`; `line` is the line of the closing parenthesis.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        line: usize,
    },
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Literal(Literal::Number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Expr::Literal(Literal::Bool(value))
    }

    pub fn variable(name: impl Into<String>, line: usize) -> Self {
        Expr::Variable {
            name: name.into(),
            line,
        }
    }

    pub fn assign(name: impl Into<String>, value: Expr, line: usize) -> Self {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
            line,
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(op: UnaryOp, operand: Expr, line: usize) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
            line,
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr, line: usize) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            line,
        }
    }

    pub fn logical(left: Expr, op: LogicalOp, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>, line: usize) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
            line,
        }
    }

    /// The variable an assignment to this expression would bind.
    ///
    /// Groupings are transparent: `(x)` targets `x`. Every other shape is
    /// not assignable.
    pub fn assignment_target(&self) -> Option<(&str, usize)> {
        match self {
            Expr::Variable { name, line } => Some((name, *line)),
            Expr::Grouping(inner) => inner.assignment_target(),
            _ => None,
        }
    }
}
