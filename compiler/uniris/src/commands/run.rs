//! The `run` command: evaluate a Uniris source file.

use tracing::debug;
use uniris_eval::{stdout_handler, InterpreterBuilder};

use super::read_file;
use crate::run_source;

/// Run a source file, printing as the program goes.
///
/// On failure, output already printed stays on stdout and the error goes
/// to stderr as `Error: <message>`; the process exits with status 1.
pub fn run_file(path: &str) {
    let content = read_file(path);
    debug!(path, bytes = content.len(), "running file");

    let mut interpreter = InterpreterBuilder::new()
        .print_handler(stdout_handler())
        .build();
    if let Err(err) = run_source(&mut interpreter, &content, None) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
