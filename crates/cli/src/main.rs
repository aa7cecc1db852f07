//! Cardfile CLI — contact book over a single JSON record store.
//!
//! Three modes:
//! - **Shell mode**: `cardfile [flags] COMMAND` — single command, exit
//! - **REPL mode**: `cardfile [flags]` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "list" | cardfile` — line-by-line from stdin

mod commands;
mod format;
mod parse;
mod repl;

use std::io::IsTerminal;
use std::process;

use cardfile_store::{ContactBook, ContactId, Result};

use commands::build_cli;
use format::{
    format_added, format_contact, format_error, format_list, format_removed, format_updated,
    OutputMode,
};
use parse::{matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("tracing") {
        init_tracing();
    }

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // Open the store before dispatching any mode
    let book = match open_book(&matches) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    };

    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let exit_code = match matches_to_action(&matches) {
            Ok(action) => execute_action(&book, action, mode),
            Err(e) => {
                eprintln!("(error) {}", e);
                2
            }
        };
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&book, mode);
    } else {
        process::exit(repl::run_pipe(&book, mode));
    }
}

fn open_book(matches: &clap::ArgMatches) -> Result<ContactBook> {
    let name = matches
        .get_one::<String>("book")
        .map(String::as_str)
        .unwrap_or("main");
    let dir = matches
        .get_one::<String>("dir")
        .map(String::as_str)
        .unwrap_or(".");
    ContactBook::open_in(dir, name)
}

/// Run one store action and print its result.
///
/// On failure the displayed state is left as-is: nothing is printed to
/// stdout, the diagnostic goes to stderr, and the exit code is nonzero.
fn execute_action(book: &ContactBook, action: CliAction, mode: OutputMode) -> i32 {
    let result = match action {
        CliAction::List => book.list_all().map(|entries| format_list(&entries, mode)),
        CliAction::Show { id } => book.get(&id).map(|c| format_contact(&id, &c, mode)),
        CliAction::Add { contact } => book.add(contact).map(|id| format_added(&id, mode)),
        CliAction::Update { id, contact } => {
            book.update(&id, contact).map(|()| format_updated(mode))
        }
        CliAction::Remove { ids } => remove_all(book, &ids).map(|n| format_removed(n, mode)),
    };

    match result {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

/// Remove entries one at a time; a missing id aborts the remainder.
fn remove_all(book: &ContactBook, ids: &[ContactId]) -> Result<usize> {
    for id in ids {
        book.remove(id)?;
    }
    Ok(ids.len())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
