//! Abstract syntax tree.
//!
//! Two closed families of variants: [`Expr`] and [`Stmt`]. A program is a
//! `Vec<Stmt>`. Nodes are immutable once parsed; function declarations are
//! reference-counted so a function value can share its body with the tree
//! it was declared in.

mod display;
mod expr;
mod operators;
mod stmt;

pub use expr::Expr;
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{FunctionDecl, Stmt};

#[cfg(test)]
mod tests;
