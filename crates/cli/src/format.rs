//! Result → human/JSON string formatting.
//!
//! Two modes:
//! - **Human** (default): labelled field-per-line details, `(error)` prefix
//!   on diagnostics
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use std::collections::BTreeMap;

use cardfile_store::{Contact, ContactId, Error};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the full listing: one line per entry in human mode, the id→contact
/// mapping in JSON mode.
pub fn format_list(entries: &BTreeMap<ContactId, Contact>, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(entries)
            .unwrap_or_else(|_| "{}".to_string()),
        OutputMode::Human => {
            if entries.is_empty() {
                return "(empty)".to_string();
            }
            entries
                .iter()
                .map(|(id, contact)| format!("{}  {}", id, contact.name))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Format one entry's details (the original program's info panel).
pub fn format_contact(id: &ContactId, contact: &Contact, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "id": id.to_string(),
            "name": contact.name,
            "email": contact.email,
            "phone": contact.phone,
            "address": contact.address,
        }))
        .unwrap_or_else(|_| "{}".to_string()),
        OutputMode::Human => format!(
            "Id:      {}\nName:    {}\nEmail:   {}\nPhone:   {}\nAddress: {}",
            id, contact.name, contact.email, contact.phone, contact.address
        ),
    }
}

/// Format the id minted by a successful add.
pub fn format_added(id: &ContactId, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "added": id.to_string()
        }))
        .unwrap_or_else(|_| "{}".to_string()),
        OutputMode::Human => id.to_string(),
    }
}

/// Format a successful update.
pub fn format_updated(mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => "{\n  \"updated\": true\n}".to_string(),
        OutputMode::Human => "OK".to_string(),
    }
}

/// Format a successful removal of `count` entries.
pub fn format_removed(count: usize, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "removed": count
        }))
        .unwrap_or_else(|_| "{}".to_string()),
        OutputMode::Human => format!("Removed {}", count),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}
