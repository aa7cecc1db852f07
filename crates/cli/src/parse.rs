//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into the store operation to run:
//! - Standard commands → `CliAction`
//! - REPL meta-commands → `MetaCommand` (checked before clap sees the line)

use clap::ArgMatches;

use cardfile_store::{Contact, ContactId};

/// The result of parsing user input.
#[derive(Debug)]
pub enum CliAction {
    /// List every entry's id and name.
    List,
    /// Show one entry's details.
    Show { id: ContactId },
    /// Add an entry; prints the minted id.
    Add { contact: Contact },
    /// Replace an entry wholesale.
    Update { id: ContactId, contact: Contact },
    /// Remove one or more entries.
    Remove { ids: Vec<ContactId> },
}

/// REPL-only meta-commands.
pub enum MetaCommand {
    Help,
    Quit,
    Clear,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.trim() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "list" => Ok(CliAction::List),
        "show" => Ok(CliAction::Show {
            id: parse_id(sub_matches)?,
        }),
        "add" => Ok(CliAction::Add {
            contact: contact_from_matches(sub_matches),
        }),
        "update" => Ok(CliAction::Update {
            id: parse_id(sub_matches)?,
            contact: contact_from_matches(sub_matches),
        }),
        "remove" => {
            let ids = sub_matches
                .get_many::<String>("id")
                .into_iter()
                .flatten()
                .map(|s| parse_id_str(s))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CliAction::Remove { ids })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_id(matches: &ArgMatches) -> Result<ContactId, String> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or_else(|| "Missing contact id".to_string())?;
    parse_id_str(raw)
}

fn parse_id_str(raw: &str) -> Result<ContactId, String> {
    ContactId::from_string(raw).ok_or_else(|| format!("Invalid contact id: {}", raw))
}

/// Assemble the four contact fields; clap defaults omitted flags to "".
fn contact_from_matches(matches: &ArgMatches) -> Contact {
    Contact::new(
        matches.get_one::<String>("name").cloned().unwrap_or_default(),
        matches.get_one::<String>("email").cloned().unwrap_or_default(),
        matches.get_one::<String>("phone").cloned().unwrap_or_default(),
        matches
            .get_one::<String>("address")
            .cloned()
            .unwrap_or_default(),
    )
}
