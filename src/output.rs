use serde::Serialize;

/// Aggregate statistics for a single generation run.
#[derive(Debug, Serialize)]
pub struct GraphStats {
    /// Number of phrase nodes in the generated graph.
    pub node_count: usize,
    /// Number of discovery edges in the generated graph.
    pub edge_count: usize,
    /// Unique words and names in the loaded dictionary.
    pub dictionary_words: usize,
    /// Wall-clock time for the generation run in seconds.
    pub elapsed_secs: f64,
}

/// Print a summary of the generation run to stdout.
///
/// - `json = true`: emit a pretty-printed JSON object.
/// - `json = false`: emit a one-line human-readable summary.
pub fn print_summary(stats: &GraphStats, json: bool) {
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serialising stats: {}", e),
        }
        return;
    }

    println!(
        "Graph generated with {} nodes and {} edges in {:.2}s.",
        stats.node_count, stats.edge_count, stats.elapsed_secs
    );
}
