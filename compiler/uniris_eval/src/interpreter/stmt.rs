//! Statement execution.

use std::rc::Rc;

use tracing::debug;
use uniris_ir::Stmt;
use uniris_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{ControlAction, ExecResult};
use crate::value::Callable;
use crate::{Environment, Value};

impl Interpreter {
    /// Execute one statement against `env`.
    ///
    /// `Ok` carries the value of an expression statement and `Nil` for
    /// everything else.
    pub fn exec_stmt(&mut self, stmt: &Stmt, env: &Environment) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt, env))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt, env: &Environment) -> ExecResult {
        match stmt {
            Stmt::Expression(expr) => Ok(self.eval_expr(expr, env)?),
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr, env)?;
                self.print_handler.println(&value.to_string());
                Ok(Value::Nil)
            }
            Stmt::Block(stmts) => {
                let scope = Environment::with_enclosing(env);
                self.exec_block(stmts, &scope)
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(condition, env)?.is_truthy() {
                    self.exec_stmt(then_branch, env)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch, env)?;
                }
                Ok(Value::Nil)
            }
            Stmt::While { condition, body } => {
                while self.eval_expr(condition, env)?.is_truthy() {
                    self.exec_stmt(body, env)?;
                }
                Ok(Value::Nil)
            }
            Stmt::Function(decl) => {
                debug!(name = %decl.name, arity = decl.arity(), "declare function");
                let function = Value::Callable(Callable::Function(Rc::clone(decl)));
                env.set(&decl.name, function);
                Ok(Value::Nil)
            }
            Stmt::Return { value, .. } => {
                let value = self.eval_expr(value, env)?;
                Err(ControlAction::Return(value))
            }
        }
    }

    /// Run `stmts` in `scope`, which the caller has already created.
    ///
    /// Stops at the first `Return` or error and hands it up unchanged.
    pub(crate) fn exec_block(&mut self, stmts: &[Stmt], scope: &Environment) -> ExecResult {
        for stmt in stmts {
            self.exec_stmt(stmt, scope)?;
        }
        Ok(Value::Nil)
    }
}
