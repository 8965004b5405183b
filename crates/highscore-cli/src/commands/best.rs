//! Best command implementation.

use anyhow::{Context, Result};
use highscore_core::ScoreStore;

pub fn run(store: &ScoreStore, username: &str) -> Result<()> {
    let best = store
        .user_high_score(username)
        .with_context(|| format!("Failed to read {}", store.path().display()))?;
    println!("{}", best);
    Ok(())
}
