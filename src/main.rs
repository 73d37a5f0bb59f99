mod cli;
mod config;
mod export;
mod graph;
mod launcher;
mod neighbors;
mod output;
mod server;
mod words;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::PhraseGraphConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PhraseGraphConfig::load(Path::new("."));

    match cli.command {
        Commands::Generate {
            phrase,
            depth,
            json,
            stats_json,
        } => {
            launcher::generate(&phrase, depth, json.as_deref(), stats_json, &config)?;
        }
        Commands::Run { phrase, depth } => {
            launcher::run(&phrase, depth, &config)?;
        }
        Commands::Serve => {
            server::serve_blocking(Path::new("."), server::PORT)?;
        }
    }

    Ok(())
}
