//! Uniris - interpreter for Uniris smart-contract scripts.
//!
//! The pipeline is `scan` -> `parse` -> `Interpreter::execute`. This crate
//! glues the stages together behind [`interpret`] and [`Session`], and
//! holds the CLI command handlers used by the `uniris` binary.
//!
//! Every top-level call builds a fresh root scope holding the built-ins.
//! Program bindings live one level below it, either in a throwaway scope
//! or in a caller-owned session scope that is re-attached on each call.

pub mod commands;

use std::sync::Once;

use tracing::debug;
use uniris_eval::{
    buffer_handler, native_environment, Environment, EvalError, Interpreter, InterpreterBuilder,
    Value,
};
use uniris_lexer::LexError;
use uniris_parse::ParseError;

pub use uniris_eval as eval;

/// Any failure of a top-level interpretation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InterpretError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Outcome of [`interpret`].
///
/// `output` holds everything printed, including what was printed before
/// a runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpretation {
    pub output: String,
    pub error: Option<InterpretError>,
}

impl Interpretation {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The output on success, the error otherwise. Partial output is dropped.
    pub fn into_result(self) -> Result<String, InterpretError> {
        match self.error {
            None => Ok(self.output),
            Some(err) => Err(err),
        }
    }
}

/// Lex, parse and run `source`, capturing its output.
///
/// With a `session`, bindings made by the program persist in it for the
/// next call; without one they are discarded.
pub fn interpret(source: &str, session: Option<&Environment>) -> Interpretation {
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let error = run_source(&mut interpreter, source, session).err();
    Interpretation {
        output: handler.take_output(),
        error,
    }
}

/// Run `source` with an already configured interpreter.
///
/// Parsing finishes before anything executes, so a syntax error anywhere
/// means no output at all.
pub fn run_source(
    interpreter: &mut Interpreter,
    source: &str,
    session: Option<&Environment>,
) -> Result<(), InterpretError> {
    let tokens = uniris_lexer::scan(source)?;
    let program = uniris_parse::parse(&tokens)?;

    let root = native_environment();
    let scope = match session {
        Some(scope) => {
            scope.set_enclosing(Some(root));
            scope.clone()
        }
        None => Environment::with_enclosing(&root),
    };
    debug!(
        statements = program.len(),
        persistent = session.is_some(),
        "running program"
    );
    interpreter.execute(&program, &scope)?;
    Ok(())
}

/// A persistent top-level scope shared by consecutive interpretations.
///
/// Used by the console: a function declared on one line can be called on
/// the next.
#[derive(Clone, Debug, Default)]
pub struct Session {
    scope: Environment,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interpret(&self, source: &str) -> Interpretation {
        interpret(source, Some(&self.scope))
    }

    /// Read a binding, including the built-ins of the last call.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.scope.lookup(name)
    }

    pub fn scope(&self) -> &Environment {
        &self.scope
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=uniris_eval=debug`. `UNIRIS_LOG_TREE=1` switches to an
/// indented call-tree layout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("UNIRIS_LOG_TREE").is_ok_and(|v| v == "1");
        if tree {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
