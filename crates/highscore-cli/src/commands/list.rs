//! List command implementation.

use anyhow::{Context, Result};
use highscore_core::ScoreStore;

pub fn run(store: &ScoreStore, json: bool) -> Result<()> {
    let entries = store
        .read_all()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;
    super::print_entries(&entries, json)
}
