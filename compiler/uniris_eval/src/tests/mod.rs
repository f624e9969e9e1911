//! Evaluator tests that span more than one module.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{buffer_handler, native_environment, Environment, EvalError, InterpreterBuilder};

/// Lex, parse and run `source` in a fresh scope below the built-ins.
///
/// Returns the captured output, or the output so far together with the
/// runtime error.
pub(crate) fn run(source: &str) -> Result<String, (String, EvalError)> {
    let env = Environment::with_enclosing(&native_environment());
    run_in(source, &env, None)
}

pub(crate) fn run_in(
    source: &str,
    env: &Environment,
    max_call_depth: Option<usize>,
) -> Result<String, (String, EvalError)> {
    let tokens = uniris_lexer::scan(source).unwrap();
    let program = uniris_parse::parse(&tokens).unwrap();

    let handler = buffer_handler();
    let mut builder = InterpreterBuilder::new().print_handler(handler.clone());
    if let Some(depth) = max_call_depth {
        builder = builder.max_call_depth(depth);
    }
    let mut interpreter = builder.build();

    match interpreter.execute(&program, env) {
        Ok(()) => Ok(handler.get_output()),
        Err(err) => Err((handler.get_output(), err)),
    }
}

pub(crate) fn output(source: &str) -> String {
    run(source).unwrap()
}

pub(crate) fn error(source: &str) -> EvalError {
    run(source).unwrap_err().1
}
