use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::config::PhraseGraphConfig;
use crate::export;
use crate::graph::expand::expand;
use crate::output::{GraphStats, print_summary};
use crate::server;
use crate::words::Dictionary;

/// Fixed path of the graph artifact, relative to the working directory.
/// Overwritten on each run.
pub const ARTIFACT_FILE: &str = "graph.json";

/// The `generate` command: load the dictionary, expand the phrase, and either
/// write node-link JSON to `json_out` or print the edge list to stdout.
///
/// Progress lines go to stderr; stdout carries only results (the edge list, or
/// the stats when `stats_json` is set).
pub fn generate(
    phrase: &str,
    depth: usize,
    json_out: Option<&Path>,
    stats_json: bool,
    config: &PhraseGraphConfig,
) -> anyhow::Result<GraphStats> {
    let started = Instant::now();

    eprintln!("Loading word lists...");
    let dict = Dictionary::load(config)?;
    eprintln!("Loaded {} unique words/names.", dict.len());

    eprintln!("Generating graph for '{phrase}' with depth {depth}...");
    let graph = expand(phrase, depth, &dict);

    let stats = GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        dictionary_words: dict.len(),
        elapsed_secs: started.elapsed().as_secs_f64(),
    };

    match json_out {
        Some(path) => {
            export::write_json(path, &graph)?;
            eprintln!("Graph data saved to {}", path.display());
        }
        None => {
            println!("Edges:");
            for edge in graph.graph.edge_indices() {
                if let Some((a, b)) = graph.graph.edge_endpoints(edge) {
                    println!("  {} -> {}", graph.graph[a], graph.graph[b]);
                }
            }
        }
    }

    print_summary(&stats, stats_json);
    Ok(stats)
}

/// The `run` command: generate the fixed artifact, then serve the current
/// directory. Strictly sequential; a generation failure is reported but does
/// not stop the server from starting. Blocks until the server terminates.
pub fn run(phrase: &str, depth: usize, config: &PhraseGraphConfig) -> anyhow::Result<()> {
    println!("Generating graph for '{phrase}' (depth {depth})...");

    if let Err(err) = generate(phrase, depth, Some(Path::new(ARTIFACT_FILE)), false, config) {
        eprintln!("warning: graph generation failed: {err:#}. Serving anyway.");
    }

    println!("Serving current directory at http://localhost:{}", server::PORT);
    // The serve call below never returns on the happy path; make sure the
    // status lines are out before blocking.
    std::io::stdout().flush().ok();

    server::serve_blocking(Path::new("."), server::PORT)
}
