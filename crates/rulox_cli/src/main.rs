//! rulox: command-line tokenizer for Lox source code.
//!
//! Usage:
//!   rulox [SCRIPT]
//!
//! With a script path, the file is scanned and each token printed, one per
//! line. Without arguments, an interactive prompt scans one line at a time.

use clap::Parser;
use rulox_scanner::ScanResult;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "rulox", about = "rulox - A Lox tokenizer written in Rust")]
struct Cli {
    /// Lox script to tokenize.
    #[arg(value_name = "SCRIPT")]
    script: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    };

    process::exit(exit_code);
}

/// Scan a script file. Exits 74 when the file cannot be read and 65 when
/// the scan reported diagnostics, following the usual sysexits codes.
fn run_file(path: &str) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            return 74;
        }
    };

    let result = run(&source);
    if result.diagnostics.has_errors() {
        65
    } else {
        0
    }
}

/// Interactive prompt: scan each input line independently.
///
/// Diagnostics are printed but never end the session, and each line gets a
/// fresh scan, so errors cannot leak from one line into the next.
fn run_prompt() -> i32 {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("failed to start prompt: {}", err);
            return 1;
        }
    };

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.is_empty() {
                    break;
                }
                let _ = editor.add_history_entry(&line);
                run(&line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", err);
                return 1;
            }
        }
    }

    0
}

/// Scan the given source, print every token to stdout and every diagnostic
/// to stderr, and hand the result back to the caller.
fn run(source: &str) -> ScanResult {
    let result = rulox_scanner::scan(source);

    for token in &result.tokens {
        println!("{}", token);
    }
    for diagnostic in result.diagnostics.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    result
}
