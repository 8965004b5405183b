//! Command implementations and shared output helpers.

pub mod add;
pub mod best;
pub mod list;
pub mod top;

use highscore_core::ScoreEntry;

/// Format one entry for terminal output
pub(crate) fn format_entry_line(entry: &ScoreEntry) -> String {
    format!("{:<24}  {:>10}  {}", entry.timestamp, entry.score, entry.username)
}

/// Print entries as a table, or as a JSON array when `json` is set
pub(crate) fn print_entries(entries: &[ScoreEntry], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No scores recorded");
        return Ok(());
    }

    println!("{:<24}  {:>10}  {}", "TIMESTAMP", "SCORE", "USERNAME");
    for entry in entries {
        println!("{}", format_entry_line(entry));
    }
    Ok(())
}
