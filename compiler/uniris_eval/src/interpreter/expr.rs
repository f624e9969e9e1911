//! Expression evaluation.

use uniris_ir::{Expr, LogicalOp};
use uniris_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{not_callable, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{Environment, Value};

impl Interpreter {
    /// Evaluate an expression against `env`.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Variable { name, line } => env.get(name).map_err(|e| e.with_line(*line)),
            Expr::Assign { name, value, .. } => {
                let value = self.eval_expr(value, env)?;
                env.set(name, value.clone());
                Ok(value)
            }
            Expr::Grouping(inner) => self.eval_expr(inner, env),
            Expr::Unary { op, operand, line } => {
                let operand = self.eval_expr(operand, env)?;
                evaluate_unary(*op, &operand).map_err(|e| e.with_line(*line))
            }
            Expr::Binary {
                left,
                op,
                right,
                line,
            } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                evaluate_binary(&left, *op, &right).map_err(|e| e.with_line(*line))
            }
            Expr::Logical { left, op, right } => {
                let left = self.eval_expr(left, env)?;
                // The deciding operand itself is the result, not a bool.
                let short_circuit = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.eval_expr(right, env)
                }
            }
            Expr::Call { callee, args, line } => {
                let callee = self.eval_expr(callee, env)?;
                let callable = match callee {
                    Value::Callable(callable) => callable,
                    other => return Err(not_callable(&other).with_line(*line)),
                };
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call_callable(&callable, args, env)
                    .map_err(|e| e.with_line(*line))
            }
        }
    }
}
