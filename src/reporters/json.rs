//! JSON reporter
//!
//! Outputs graph statistics plus the movie and actor lists as pretty-printed JSON.

use crate::graph::{CastGraph, GraphStats};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct GraphSummary<'a> {
    stats: GraphStats,
    movies: &'a [String],
    actors: Vec<&'a str>,
}

/// Render graph summary as JSON
pub fn render(graph: &CastGraph) -> Result<String> {
    let summary = GraphSummary {
        stats: graph.stats(),
        movies: graph.movies(),
        actors: graph.actors(),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
