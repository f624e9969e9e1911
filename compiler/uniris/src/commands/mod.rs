//! Command handlers for the `uniris` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! [`read_file`] live here in the module root.

mod console;
mod debug;
mod run;

pub use console::{console_loop, run_console, CONSOLE_BANNER, PROMPT};
pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Read a source file, describing the failure for the user.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
