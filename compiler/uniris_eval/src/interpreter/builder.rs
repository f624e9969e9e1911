//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: output to stdout, no call depth limit.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Fail calls nested deeper than `depth` with a recursion limit error.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}
