//! Runtime errors and the control signal for `return`.
//!
//! Errors are built through the factory functions below and located with
//! [`EvalError::with_line`]. The first line attached wins, so an error keeps
//! the innermost location it was raised at while it propagates outwards.

use std::fmt;

use thiserror::Error;

use crate::Value;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("Undefined variable {name}")]
    UndefinedVariable { name: String },

    /// Wrong operand kind for an operator.
    #[error("{message}")]
    TypeError { message: String },

    #[error("Can only call functions, not {type_name}")]
    NotCallable { type_name: &'static str },

    #[error("{name} expects {expected} argument(s) but got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Only raised when a call depth limit is configured.
    #[error("Maximum call depth of {limit} exceeded")]
    RecursionLimit { limit: usize },

    /// Failure inside a built-in function.
    #[error("{message}")]
    Native { message: String },
}

/// A runtime error with an optional source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: Option<usize>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, line: None }
    }

    /// Attach a source line unless one is already set.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {}

/// Non-local exit from statement execution.
///
/// `Return` is not an error: it unwinds to the nearest call boundary (or
/// the top of the program) and becomes a value there.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Return(Value),
    Error(EvalError),
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

/// Result of executing a statement.
pub type ExecResult = Result<Value, ControlAction>;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

// Factory functions

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn type_error(message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::TypeError {
        message: message.into(),
    })
}

#[cold]
pub fn operands_must_be_numbers(op: &str, left: &Value, right: &Value) -> EvalError {
    type_error(format!(
        "Operands of '{op}' must be numbers, got {} and {}",
        left.type_name(),
        right.type_name()
    ))
}

#[cold]
pub fn operand_must_be_number(op: &str, operand: &Value) -> EvalError {
    type_error(format!(
        "Operand of '{op}' must be a number, got {}",
        operand.type_name()
    ))
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { limit })
}

#[cold]
pub fn native_error(message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::Native {
        message: message.into(),
    })
}
