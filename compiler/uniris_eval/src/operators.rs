//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the closed value set. Arithmetic and
//! ordering need numbers on both sides; `+` falls back to concatenating
//! display forms; equality is structural with no coercion.

use uniris_ir::{BinaryOp, UnaryOp};

use crate::errors::{operand_must_be_number, operands_must_be_numbers, EvalResult};
use crate::Value;

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, op: BinaryOp, right: &Value) -> EvalResult {
    let numbers = || match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_must_be_numbers(op.as_symbol(), left, right)),
    };

    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            _ => Ok(Value::Str(format!("{left}{right}"))),
        },
        BinaryOp::Sub => numbers().map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers().map(|(a, b)| Value::Number(a * b)),
        BinaryOp::Div => numbers().map(|(a, b)| Value::Number(a / b)),
        BinaryOp::Gt => numbers().map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::GtEq => numbers().map(|(a, b)| Value::Bool(a >= b)),
        BinaryOp::Lt => numbers().map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::LtEq => numbers().map(|(a, b)| Value::Bool(a <= b)),
    }
}

/// Evaluate a unary operation.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number(op.as_symbol(), operand)),
        },
    }
}
