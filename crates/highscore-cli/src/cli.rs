//! CLI argument definitions for highscore.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use highscore_core::DEFAULT_STORE_FILE;

#[derive(Parser)]
#[command(name = "highscore")]
#[command(about = "Arcade score log", version)]
pub struct Args {
    /// Score file path
    #[arg(long, short, env = "HIGHSCORE_FILE", default_value = DEFAULT_STORE_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a new score
    Add {
        /// Player name
        username: String,
        /// Score achieved
        score: u32,
    },
    /// List every recorded score in file order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a player's best score
    Best {
        /// Player name
        username: String,
    },
    /// Show the highest scores
    Top {
        /// Number of entries (negative for all)
        #[arg(short, default_value = "10", allow_hyphen_values = true)]
        n: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
