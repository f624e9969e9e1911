//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match uniris_lexer::scan(&content) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in &tokens {
                println!("  {token}");
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Parse a file and display each statement as an S-expression.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let program = uniris_lexer::scan(&content)
        .map_err(crate::InterpretError::from)
        .and_then(|tokens| uniris_parse::parse(&tokens).map_err(crate::InterpretError::from));

    match program {
        Ok(statements) => {
            println!("Parse result for '{path}':");
            println!("  Statements: {}", statements.len());
            println!();
            for stmt in &statements {
                println!("  {stmt}");
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
