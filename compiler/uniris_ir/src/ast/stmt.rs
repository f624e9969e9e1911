//! Statement nodes.

use std::rc::Rc;

use crate::Expr;

/// A `function name(params) { body }` declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    /// Statements of the body block.
    pub body: Vec<Stmt>,
    pub line: usize,
}

impl FunctionDecl {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A statement.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    /// Evaluate and discard.
    Expression(Expr),
    Print(Expr),
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    /// Shared with every function value created from it.
    Function(Rc<FunctionDecl>),
    Return { value: Expr, line: usize },
}

impl Stmt {
    pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn function(
        name: impl Into<String>,
        params: Vec<String>,
        body: Vec<Stmt>,
        line: usize,
    ) -> Self {
        Stmt::Function(Rc::new(FunctionDecl {
            name: name.into(),
            params,
            body,
            line,
        }))
    }
}
