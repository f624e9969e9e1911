//! The interactive console.

use std::io::{self, BufRead, Write};

use crate::{InterpretError, Session};

pub const CONSOLE_BANNER: &str = "Type Ctrl-C to exit the console";
pub const PROMPT: &str = "> ";

/// Read lines from stdin and interpret each against one session.
///
/// Functions and variables defined on one line stay visible on the next.
/// End of input leaves the console.
pub fn run_console() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = console_loop(Session::new(), stdin.lock(), stdout.lock()) {
        eprintln!("console I/O error: {err}");
        std::process::exit(1);
    }
}

/// The console loop over arbitrary streams.
pub fn console_loop<R: BufRead, W: Write>(
    session: Session,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{CONSOLE_BANNER}")?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let result = session.interpret(&line);
        write!(out, "{}", result.output)?;
        if let Some(err) = &result.error {
            report(&mut out, err)?;
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &InterpretError) -> io::Result<()> {
    writeln!(out, "Error: {err}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        console_loop(Session::new(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bindings_survive_between_lines() {
        let out = transcript("a = 2\nprint a * 3\n");
        assert_eq!(
            out,
            "Type Ctrl-C to exit the console\n> > 6\n> \n"
        );
    }

    #[test]
    fn errors_are_reported_and_the_loop_continues() {
        let out = transcript("print b\nprint 1\n");
        assert_eq!(
            out,
            "Type Ctrl-C to exit the console\n> Error: Line 1: Undefined variable b\n> 1\n> \n"
        );
    }

    #[test]
    fn functions_declared_earlier_are_callable() {
        let out = transcript("function twice(x) { return x * 2 }\nprint twice(21)\n");
        assert!(out.contains("> 42\n"));
    }
}
