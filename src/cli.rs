use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate word-ladder graphs from a seed phrase and serve them for visualization.
///
/// phrase-graph expands a phrase into its edit-distance-1 neighborhood (against a
/// cached English word + first-name dictionary), breadth-first to a given depth,
/// and can write the result as node-link JSON for a force-graph viewer.
#[derive(Parser, Debug)]
#[command(
    name = "phrase-graph",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a phrase-neighbor graph from a starting phrase.
    ///
    /// Without --json, prints the edge list to stdout. Progress lines go to
    /// stderr so stdout stays clean for results.
    Generate {
        /// The starting string/phrase.
        phrase: String,

        /// Depth of the breadth-first expansion.
        #[arg(long, default_value_t = 1)]
        depth: usize,

        /// Path to save the graph as a JSON file for visualization.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Print run statistics as JSON instead of a human-readable summary.
        #[arg(long)]
        stats_json: bool,
    },

    /// Generate the graph artifact, then serve the current directory over HTTP.
    ///
    /// Writes `graph.json` to the working directory and starts a static file
    /// server on port 8000. A generation failure is reported but does not stop
    /// the server from starting.
    Run {
        /// The starting string/phrase.
        #[arg(default_value = "Alice")]
        phrase: String,

        /// Depth of the breadth-first expansion.
        #[arg(default_value_t = 2)]
        depth: usize,
    },

    /// Serve the current directory as static files on port 8000.
    Serve,
}
