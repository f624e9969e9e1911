//! Uniris IR - token and syntax tree types.
//!
//! This crate contains the data shared by every stage of the interpreter:
//! - `Token` / `TokenKind` / `Literal` produced by the lexer
//! - `Expr` and `Stmt`, the two closed families of AST nodes
//! - Operator enums with their source symbols
//!
//! Nodes are pure data. Evaluation lives in `uniris_eval`.

pub mod ast;
mod token;

pub use ast::{BinaryOp, Expr, FunctionDecl, LogicalOp, Stmt, UnaryOp};
pub use token::{Literal, Token, TokenKind};
