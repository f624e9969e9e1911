//! Runtime values.

use std::fmt;
use std::rc::Rc;

use uniris_ir::{FunctionDecl, Literal};

use crate::errors::EvalResult;

/// A dynamically-typed runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
    Callable(Callable),
}

impl Value {
    /// Only `nil` and `false` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::Callable(_) => "function",
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::Str(s.clone()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Nil => Value::Nil,
        }
    }
}

/// Structural equality. No coercion between variants.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Callable(a), Value::Callable(b)) => a == b,
            _ => false,
        }
    }
}

/// The textual form used by `print` and by string concatenation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Callable(callable) => write!(f, "{callable}"),
        }
    }
}

/// Signature of a built-in function.
pub type NativeFn = fn(&[Value]) -> EvalResult;

/// A function implemented by the host.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Anything that can appear in callee position.
///
/// A user function keeps only its declaration. It captures no environment:
/// free names resolve through whatever scope is active at the call site.
#[derive(Clone, Debug)]
pub enum Callable {
    Function(Rc<FunctionDecl>),
    Native(NativeFunction),
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::Function(decl) => &decl.name,
            Callable::Native(native) => native.name,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Callable::Function(decl) => decl.arity(),
            Callable::Native(native) => native.arity,
        }
    }
}

/// Identity, not structure: the same declaration, or the same built-in.
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Callable::Function(a), Callable::Function(b)) => Rc::ptr_eq(a, b),
            (Callable::Native(a), Callable::Native(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Function(decl) => write!(f, "<fn {}>", decl.name),
            Callable::Native(native) => write!(f, "<native fn {}>", native.name),
        }
    }
}
