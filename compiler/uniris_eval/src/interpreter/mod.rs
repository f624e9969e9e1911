//! Tree-walking interpreter for Uniris.
//!
//! # Architecture
//!
//! - `expr.rs`: expression evaluation, `Result<Value, EvalError>`
//! - `stmt.rs`: statement execution, `Result<Value, ControlAction>`
//! - `function_call.rs`: the call protocol
//!
//! `return` travels as [`ControlAction::Return`] through blocks, branches
//! and loops until a call boundary turns it back into a value. Expressions
//! never see it.
//!
//! Scopes are threaded explicitly. A call's frame is a child of the scope
//! active at the call expression, not of the scope the function was
//! declared in.

mod builder;
mod expr;
mod function_call;
mod stmt;

pub use builder::InterpreterBuilder;

use tracing::debug;
use uniris_ir::Stmt;

use crate::errors::{recursion_limit_exceeded, ControlAction, EvalError};
use crate::{Environment, SharedPrintHandler};

/// Tree-walking interpreter.
///
/// Holds only configuration and the current call depth; all program state
/// lives in the [`Environment`] passed to [`Interpreter::execute`].
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    /// `None` means unbounded: the stack grows on demand.
    max_call_depth: Option<usize>,
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter printing to stdout with no call depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Run a program against `env`, statement by statement.
    ///
    /// A `return` outside any function ends the program early and is not
    /// an error. Output printed before a failure stays printed.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn execute(&mut self, program: &[Stmt], env: &Environment) -> Result<(), EvalError> {
        for stmt in program {
            match self.exec_stmt(stmt, env) {
                Ok(_) => {}
                Err(ControlAction::Return(value)) => {
                    debug!(%value, "top-level return");
                    break;
                }
                Err(ControlAction::Error(err)) => return Err(err),
            }
        }
        Ok(())
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of user function calls currently on the stack.
    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    #[inline]
    pub(crate) fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if let Some(max_depth) = self.max_call_depth {
            if self.call_depth >= max_depth {
                return Err(recursion_limit_exceeded(max_depth));
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
