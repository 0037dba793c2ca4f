use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex types in the cast graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Movie,
    Actor,
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKind::Movie => write!(f, "movie"),
            VertexKind::Actor => write!(f, "actor"),
        }
    }
}

/// Counts describing a loaded graph
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphStats {
    pub total_vertices: usize,
    pub total_movies: usize,
    pub total_actors: usize,
    /// Directed adjacency entries (two per credit)
    pub total_edges: usize,
    /// Raw rows retained for aggregation
    pub total_records: usize,
}

/// Index-based view of the graph consumed by the TGF writer
///
/// Indices are 1-based and follow vertex insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TgfView<'a> {
    pub vertices: Vec<(usize, &'a str)>,
    pub edges: Vec<(usize, usize)>,
}
