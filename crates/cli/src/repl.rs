//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use cardfile_store::ContactBook;

use crate::commands::build_repl_cmd;
use crate::execute_action;
use crate::format::OutputMode;
use crate::parse::{check_meta_command, matches_to_action, MetaCommand};

/// Run the interactive REPL.
pub fn run_repl(book: &ContactBook, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start interactive mode: {}", e);
            return;
        }
    };

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("cardfile> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help => {
                            println!("{}", build_repl_cmd().render_help());
                        }
                    }
                    continue;
                }

                execute_line(book, trimmed, mode);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Execute commands line-by-line from stdin (non-TTY invocation).
///
/// Returns the process exit code: 0 if every line succeeded, 1 otherwise.
pub fn run_pipe(book: &ContactBook, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if execute_line(book, trimmed, mode) != 0 {
            exit_code = 1;
        }
    }

    exit_code
}

/// Tokenize and run one command line. Returns 0 on success.
fn execute_line(book: &ContactBook, line: &str, mode: OutputMode) -> i32 {
    // Tokenize with shlex (respects quotes)
    let tokens = match shlex::split(line) {
        Some(t) => t,
        None => {
            eprintln!("(error) Invalid quoting");
            return 2;
        }
    };

    match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(matches) => match matches_to_action(&matches) {
            Ok(action) => execute_action(book, action, mode),
            Err(e) => {
                eprintln!("(error) {}", e);
                2
            }
        },
        Err(e) => {
            // clap renders its own usage/help output
            let _ = e.print();
            2
        }
    }
}

fn history_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cardfile_history"))
}
