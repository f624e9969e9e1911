//! Function call evaluation methods for the Interpreter.

use super::Interpreter;
use crate::errors::{arity_mismatch, ControlAction, EvalResult};
use crate::value::Callable;
use crate::{Environment, Value};

impl Interpreter {
    /// Call `callable` with already-evaluated arguments.
    ///
    /// `env` is the scope active at the call expression. A user function's
    /// frame hangs below it, parameters are bound in the frame, and the body
    /// block runs in a child of the frame. Falling off the end yields `nil`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = %callable.name(), args = args.len(), depth = self.call_depth)
    )]
    pub fn call_callable(
        &mut self,
        callable: &Callable,
        args: Vec<Value>,
        env: &Environment,
    ) -> EvalResult {
        if args.len() != callable.arity() {
            return Err(arity_mismatch(callable.name(), callable.arity(), args.len()));
        }

        match callable {
            Callable::Native(native) => (native.func)(&args),
            Callable::Function(decl) => {
                self.check_recursion_limit()?;

                let frame = Environment::with_enclosing(env);
                for (param, arg) in decl.params.iter().zip(args) {
                    frame.define(param, arg);
                }
                let body_scope = Environment::with_enclosing(&frame);

                self.call_depth += 1;
                let outcome = self.exec_block(&decl.body, &body_scope);
                self.call_depth -= 1;

                match outcome {
                    Ok(_) => Ok(Value::Nil),
                    Err(ControlAction::Return(value)) => Ok(value),
                    Err(ControlAction::Error(err)) => Err(err),
                }
            }
        }
    }
}
