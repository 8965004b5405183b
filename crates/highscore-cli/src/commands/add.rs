//! Add command implementation.

use anyhow::{Context, Result};
use highscore_core::ScoreStore;
use tracing::info;

pub fn run(store: &ScoreStore, username: &str, score: u32) -> Result<()> {
    let entry = store
        .append(username, score)
        .with_context(|| format!("Failed to record score in {}", store.path().display()))?;

    info!("Appended entry to {}", store.path().display());
    println!("Recorded {} for {} at {}", entry.score, entry.username, entry.timestamp);
    Ok(())
}
