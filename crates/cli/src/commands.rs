//! Clap command tree definition.
//!
//! Builds the full `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
///
/// This is shared between shell mode and REPL mode.
pub fn build_cli() -> Command {
    Command::new("cardfile")
        .about("Contact book backed by a single JSON record store")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("book")
                .long("book")
                .help("Store name (default: main)")
                .global(true),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .help("Directory holding the store file (default: current directory)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("tracing")
                .long("tracing")
                .help("Enable diagnostic logging to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_list())
        .subcommand(build_show())
        .subcommand(build_add())
        .subcommand(build_update())
        .subcommand(build_remove())
}

/// Command tree for REPL lines (no leading binary name).
pub fn build_repl_cmd() -> Command {
    build_cli().no_binary_name(true)
}

fn build_list() -> Command {
    Command::new("list").about("List the id and name of every entry")
}

fn build_show() -> Command {
    Command::new("show").about("Show one entry's details").arg(
        Arg::new("id")
            .help("Contact id (hex, as printed by add/list)")
            .required(true),
    )
}

fn build_add() -> Command {
    with_field_args(Command::new("add").about("Add an entry; omitted fields are empty"))
}

fn build_update() -> Command {
    with_field_args(
        Command::new("update")
            .about("Replace an entry wholesale; omitted fields become empty")
            .arg(
                Arg::new("id")
                    .help("Contact id (hex, as printed by add/list)")
                    .required(true),
            ),
    )
}

fn build_remove() -> Command {
    Command::new("remove").about("Remove one or more entries").arg(
        Arg::new("id")
            .help("Contact ids (hex, as printed by add/list)")
            .required(true)
            .num_args(1..),
    )
}

/// The four contact fields, shared by `add` and `update`.
fn with_field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("name")
            .long("name")
            .help("Display name")
            .default_value(""),
    )
    .arg(
        Arg::new("email")
            .long("email")
            .help("Email address")
            .default_value(""),
    )
    .arg(
        Arg::new("phone")
            .long("phone")
            .help("Phone number")
            .default_value(""),
    )
    .arg(
        Arg::new("address")
            .long("address")
            .help("Postal address")
            .default_value(""),
    )
}
