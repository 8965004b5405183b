mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use highscore_core::ScoreStore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("highscore=warn,highscore_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let store = ScoreStore::new(&args.file);

    match args.command {
        Command::Add { username, score } => commands::add::run(&store, &username, score),
        Command::List { json } => commands::list::run(&store, json),
        Command::Best { username } => commands::best::run(&store, &username),
        Command::Top { n, json } => commands::top::run(&store, n, json),
    }
}
