use std::collections::{HashMap, VecDeque};

use crate::neighbors::neighbors;
use crate::words::{Dictionary, normalize_phrase};

use super::PhraseGraph;

/// Breadth-first expansion of a start phrase into its neighbor graph.
///
/// The start phrase is normalized and always present as a node, even at depth 0
/// or when it is not itself a valid dictionary phrase (a warning is printed in
/// that case). Each phrase first reached at depth d+1 gets an edge from its
/// discoverer; a phrase already known AT depth d+1 collects additional edges
/// from every other depth-d phrase that reaches it, but no edges point back to
/// shallower levels. Phrases at the depth limit are not expanded further.
pub fn expand(start_phrase: &str, depth: usize, dict: &Dictionary) -> PhraseGraph {
    let start = normalize_phrase(start_phrase);

    if !dict.is_valid_phrase(&start) {
        eprintln!("Warning: Start phrase '{start}' contains words not in the dictionary.");
    }

    let mut graph = PhraseGraph::new();
    graph.add_phrase(&start);

    let mut queue: VecDeque<(String, usize)> = VecDeque::new();
    let mut visited: HashMap<String, usize> = HashMap::new();
    queue.push_back((start.clone(), 0));
    visited.insert(start, 0);

    while let Some((current, current_depth)) = queue.pop_front() {
        if current_depth >= depth {
            continue;
        }

        for neighbor in neighbors(&current, dict) {
            match visited.get(&neighbor).copied() {
                None => {
                    visited.insert(neighbor.clone(), current_depth + 1);
                    graph.add_edge(&current, &neighbor);
                    queue.push_back((neighbor, current_depth + 1));
                }
                Some(d) if d == current_depth + 1 => {
                    graph.add_edge(&current, &neighbor);
                }
                Some(_) => {}
            }
        }
    }

    graph
}
