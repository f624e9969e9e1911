//! Print handler for configurable output.
//!
//! `print` statements write through a [`SharedPrintHandler`]:
//! - stdout, for running files
//! - a buffer, for `interpret` and tests
//! - nowhere, when output is irrelevant
//!
//! Enum dispatch instead of trait objects; the set of sinks is closed.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return everything captured so far and empty the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output so far. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drain captured output. Empty for handlers that don't capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_handler_println_appends_newline() {
        let handler = buffer_handler();
        handler.println("hello");
        handler.println("world");
        assert_eq!(handler.get_output(), "hello\nworld\n");
    }

    #[test]
    fn take_output_drains_buffer() {
        let handler = buffer_handler();
        handler.println("a");
        assert_eq!(handler.take_output(), "a\n");
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn non_capturing_handlers_report_nothing() {
        let silent = silent_handler();
        silent.println("dropped");
        assert_eq!(silent.get_output(), "");
        assert_eq!(stdout_handler().take_output(), "");
    }
}
