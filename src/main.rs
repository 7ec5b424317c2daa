use std::{fs,
          io::{self, BufRead, Write}};

use clap::Parser;
use hulk::Interpreter;

/// hulk is an interpreter for the HULK expression-oriented programming
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of a script to run. Starts an interactive session when omitted.
    script: Vec<String>,
}

fn main() {
    let args = Args::parse();

    match args.script.as_slice() {
        [] => run_prompt(),
        [path] => run_file(path),
        _ => {
            eprintln!("Usage: hulk [script]");
            std::process::exit(64);
        },
    }
}

/// Runs a script file, one statement per line.
///
/// Every statement runs even when an earlier one failed; the process exits
/// non-zero if any of them did.
fn run_file(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    let mut interpreter = Interpreter::new();
    let mut had_error = false;

    for line in source.lines() {
        if line.trim().is_empty() {
            interpreter.advance_line();
            continue;
        }

        match interpreter.run_statement(line) {
            Ok(value) => {
                if !value.is_void() {
                    println!("{value}");
                }
            },
            Err(errors) => {
                for error in errors {
                    eprintln!("{error}");
                }
                had_error = true;
            },
        }
    }

    if had_error {
        std::process::exit(65);
    }
}

/// Runs the interactive prompt until end of input.
///
/// The prompt shows the upcoming line number. Errors are reported and the
/// session continues; only the registry survives from one statement to the
/// next.
fn run_prompt() {
    let stdin = io::stdin();
    let mut interpreter = Interpreter::new();

    loop {
        print!("[{}] > ", interpreter.line() + 1);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            interpreter.advance_line();
            continue;
        }

        match interpreter.run_statement(line) {
            Ok(value) => {
                if !value.is_void() {
                    println!("{value}");
                }
            },
            Err(errors) => {
                for error in errors {
                    eprintln!("{error}");
                }
            },
        }
    }
}
