//! Text (terminal) graph summary

use crate::graph::CastGraph;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render the graph as a terminal summary followed by its vertex and edge listing
pub fn render(graph: &CastGraph) -> String {
    let stats = graph.stats();
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Cast Graph{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Movies: {}  Actors: {}  Credits: {}  Adjacency entries: {}\n\n",
        stats.total_movies, stats.total_actors, stats.total_records, stats.total_edges
    ));
    out.push_str(&graph.to_string());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_graph;

    #[test]
    fn test_text_render() {
        let out = render(&test_graph());
        assert!(out.contains("Cast Graph"));
        assert!(out.contains("Movies: 2  Actors: 3  Credits: 4  Adjacency entries: 8"));
        assert!(out.contains("Actors: Ed, Ellie, Owen"));
        assert!(out.contains("from Cars: [Owen, Ed]"));
    }
}
