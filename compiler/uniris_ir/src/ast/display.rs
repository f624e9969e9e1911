//! S-expression dump of the syntax tree, used by `uniris parse`.
//!
//! This is a debugging view, not a canonical unparse: the output is not
//! meant to be lexed again.

use std::fmt;

use super::{Expr, FunctionDecl, Stmt};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{literal}"),
            Expr::Variable { name, .. } => f.write_str(name),
            Expr::Assign { name, value, .. } => write!(f, "(= {name} {value})"),
            Expr::Grouping(inner) => write!(f, "(group {inner})"),
            Expr::Unary { op, operand, .. } => write!(f, "({} {operand})", op.as_symbol()),
            Expr::Binary {
                left, op, right, ..
            } => write!(f, "({} {left} {right})", op.as_symbol()),
            Expr::Logical { left, op, right } => {
                write!(f, "({} {left} {right})", op.as_symbol())
            }
            Expr::Call { callee, args, .. } => {
                write!(f, "(call {callee}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, head: &str, stmts: &[Stmt]) -> fmt::Result {
    write!(f, "({head}")?;
    for stmt in stmts {
        write!(f, " {stmt}")?;
    }
    f.write_str(")")
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(fn {} ({}) ", self.name, self.params.join(" "))?;
        write_seq(f, "block", &self.body)?;
        f.write_str(")")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(expr) => write!(f, "{expr}"),
            Stmt::Print(expr) => write!(f, "(print {expr})"),
            Stmt::Block(stmts) => write_seq(f, "block", stmts),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "(if {condition} {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " {else_branch}")?;
                }
                f.write_str(")")
            }
            Stmt::While { condition, body } => write!(f, "(while {condition} {body})"),
            Stmt::Function(decl) => write!(f, "{decl}"),
            Stmt::Return { value, .. } => write!(f, "(return {value})"),
        }
    }
}
