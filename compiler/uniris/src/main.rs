//! Uniris CLI
//!
//! Interpreter for Uniris smart contracts.

use uniris::commands::{lex_file, parse_file, run_console, run_file};

fn main() {
    uniris::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "--file" | "-f" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: uniris run <file.uniris>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "console" | "--console" => {
            run_console();
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: uniris parse <file.uniris>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: uniris lex <file.uniris>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Uniris {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A source file path runs directly.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("uniris"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Interpreter for Uniris smart contract");
    println!();
    println!("Usage: uniris <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.uniris>     Run a Uniris program");
    println!("  console               Start an interactive console");
    println!("  parse <file.uniris>   Parse and display the syntax tree");
    println!("  lex <file.uniris>     Tokenize and display tokens");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Flags:");
    println!("  --file, -f <FILE>     Same as `run <FILE>`");
    println!("  --console             Same as `console`");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>     Enable tracing, e.g. RUST_LOG=uniris_eval=debug");
    println!("  UNIRIS_LOG_TREE=1     Render traces as an indented call tree");
    println!();
    println!("Examples:");
    println!("  uniris run demos/fibonacci.uniris");
    println!("  uniris demos/counter.uniris");
    println!("  uniris --console");
}
