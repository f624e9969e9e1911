//! Uniris Eval - tree-walking evaluator for Uniris programs.
//!
//! # Architecture
//!
//! - `Environment`: chained scopes with non-shadowing assignment
//! - `Value` / `Callable`: the closed runtime value set
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Interpreter`: statement and expression walker, configured through
//!   `InterpreterBuilder`
//! - `SharedPrintHandler`: where `print` output goes

mod environment;
pub mod errors;
mod function;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult, ExecResult};
pub use function::{native_environment, NATIVES, NOW};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Callable, NativeFn, NativeFunction, Value};

#[cfg(test)]
mod tests;
