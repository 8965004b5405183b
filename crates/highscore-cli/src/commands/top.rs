//! Top command implementation.

use anyhow::{Context, Result};
use highscore_core::ScoreStore;
use tracing::debug;

pub fn run(store: &ScoreStore, n: i64, json: bool) -> Result<()> {
    let entries = store
        .top_n(n)
        .with_context(|| format!("Failed to read {}", store.path().display()))?;
    debug!("Top {} query returned {} entries", n, entries.len());
    super::print_entries(&entries, json)
}
