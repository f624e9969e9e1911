//! Grammar productions, split into expressions and statements.

mod expr;
mod stmt;
