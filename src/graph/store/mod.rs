//! Bipartite movie/actor graph store on top of petgraph
//!
//! Every credit becomes two directed edges (movie -> actor and actor -> movie)
//! so each vertex owns its full adjacency list. Labels are unique and looked
//! up through a hash index instead of scanning the vertex list.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{FameConfig, InputConfig};
use crate::error::Result;
use crate::fame::{self, FameReport};
use crate::records::{self, CastRecord};

pub use super::store_models::{GraphStats, TgfView, VertexKind};

/// Movie/actor graph built once from a cast table, then queried
#[derive(Debug, Default, Clone)]
pub struct CastGraph {
    /// Vertex weights are labels; edges carry no data
    graph: DiGraph<String, ()>,
    /// Vertex lookup by label
    node_index: FxHashMap<String, NodeIndex>,
    /// Labels seen in the actor column
    actors: FxHashSet<String>,
    /// Distinct movies in first-seen order
    movies: Vec<String>,
    /// Actor column values per movie, in row order (duplicates kept)
    cast_by_movie: FxHashMap<String, Vec<String>>,
    /// Every parsed row, in file order
    records: Vec<CastRecord>,
}

impl CastGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an already parsed record stream
    pub fn from_records(records: Vec<CastRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.add_credit(record);
        }
        debug!(
            "Built cast graph: {} vertices, {} adjacency entries",
            store.vertex_count(),
            store.adjacency_entry_count()
        );
        store
    }

    /// Read a cast table from disk and build its graph
    pub fn load(path: &Path, input: &InputConfig) -> Result<Self> {
        let records = records::read_records(path, input)?;
        let store = Self::from_records(records);
        info!(
            "Loaded {} ({} movies, {} actors)",
            path.display(),
            store.movies.len(),
            store.actors.len()
        );
        Ok(store)
    }

    // ==================== Vertex Operations ====================

    /// Insert a vertex if its label is new; returns its index either way
    pub fn add_vertex(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(label) {
            return idx;
        }

        let idx = self.graph.add_node(label.to_string());
        self.node_index.insert(label.to_string(), idx);
        idx
    }

    /// Whether a label exists in the vertex set
    pub fn contains(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    /// Get vertex index by label
    pub fn get_node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_index.get(label).copied()
    }

    /// Label stored at an index
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// True iff the label was seen in the actor column
    pub fn is_actor(&self, label: &str) -> bool {
        self.actors.contains(label)
    }

    /// Kind of an existing vertex
    pub fn kind_of(&self, label: &str) -> Option<VertexKind> {
        if !self.contains(label) {
            return None;
        }
        if self.is_actor(label) {
            Some(VertexKind::Actor)
        } else {
            Some(VertexKind::Movie)
        }
    }

    // ==================== Edge Operations ====================

    /// Connect two vertices in both directions, creating them if needed
    ///
    /// Repeated pairs are not collapsed: each call appends another entry to
    /// both adjacency lists.
    pub fn add_edge(&mut self, v1: &str, v2: &str) {
        let a = self.add_vertex(v1);
        let b = self.add_vertex(v2);
        self.graph.add_edge(a, b, ());
        self.graph.add_edge(b, a, ());
    }

    /// Record one cast row: vertices, movie order, actor set, cast index and edge
    pub fn add_credit(&mut self, record: CastRecord) {
        self.add_vertex(&record.movie);
        self.add_vertex(&record.actor);

        if !self.cast_by_movie.contains_key(&record.movie) {
            self.movies.push(record.movie.clone());
        }
        self.cast_by_movie
            .entry(record.movie.clone())
            .or_default()
            .push(record.actor.clone());
        self.actors.insert(record.actor.clone());

        self.add_edge(&record.movie, &record.actor);
        self.records.push(record);
    }

    /// Adjacent vertex indices in insertion order
    pub(crate) fn neighbor_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks a node's edge list newest-first
        let mut out: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        out.reverse();
        out
    }

    /// Adjacency list of a vertex as labels, in insertion order
    pub fn neighbors(&self, label: &str) -> Vec<String> {
        match self.get_node_index(label) {
            Some(idx) => self
                .neighbor_indices(idx)
                .into_iter()
                .filter_map(|n| self.label(n).map(str::to_string))
                .collect(),
            None => vec![],
        }
    }

    // ==================== Queries ====================

    /// Movies an actor appears in, following the actor's adjacency list
    ///
    /// An unknown actor yields an empty list and a warning.
    pub fn movies_by_actor(&self, actor: &str) -> Vec<String> {
        if !self.contains(actor) {
            warn!("No movies found for {}", actor);
            return vec![];
        }
        self.neighbors(actor)
    }

    /// Actors credited on a movie, in source row order
    ///
    /// Built from the raw rows rather than the adjacency list, so an actor
    /// with several rows for the movie appears once per row.
    pub fn actors_from_movie(&self, movie: &str) -> Vec<String> {
        self.cast_by_movie.get(movie).cloned().unwrap_or_default()
    }

    /// Number of source rows for a movie
    pub fn rows_for_movie(&self, movie: &str) -> usize {
        self.cast_by_movie.get(movie).map_or(0, Vec::len)
    }

    /// Movies separating two actors (see [`crate::graph::traversal::separation`])
    pub fn separation(&self, actor1: &str, actor2: &str) -> Result<usize> {
        super::traversal::separation(self, actor1, actor2)
    }

    /// Run the FAME lead-role test over every movie in first-seen order
    pub fn fame(&self, config: &FameConfig) -> FameReport {
        let blocks: Vec<(&str, usize)> = self
            .movies
            .iter()
            .map(|m| (m.as_str(), self.rows_for_movie(m)))
            .collect();
        fame::compute(&self.records, &blocks, config)
    }

    /// Distinct movies in first-seen order
    pub fn movies(&self) -> &[String] {
        &self.movies
    }

    /// Actor vertices in insertion order
    pub fn actors(&self) -> Vec<&str> {
        self.graph
            .node_weights()
            .filter(|label| self.is_actor(label))
            .map(String::as_str)
            .collect()
    }

    /// All vertex labels in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Raw rows in file order
    pub fn records(&self) -> &[CastRecord] {
        &self.records
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Total directed adjacency entries
    pub fn adjacency_entry_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get statistics
    pub fn stats(&self) -> GraphStats {
        let total_actors = self.vertices().filter(|v| self.is_actor(v)).count();
        GraphStats {
            total_vertices: self.vertex_count(),
            total_movies: self.vertex_count() - total_actors,
            total_actors,
            total_edges: self.adjacency_entry_count(),
            total_records: self.records.len(),
        }
    }

    // ==================== Serialization ====================

    /// 1-based vertex numbering plus one (source, target) pair per adjacency entry
    pub fn tgf_view(&self) -> TgfView<'_> {
        let vertices = self
            .graph
            .node_indices()
            .filter_map(|idx| Some((idx.index() + 1, self.label(idx)?)))
            .collect();

        let edges = self
            .graph
            .node_indices()
            .flat_map(|idx| {
                self.neighbor_indices(idx)
                    .into_iter()
                    .map(move |n| (idx.index() + 1, n.index() + 1))
            })
            .collect();

        TgfView { vertices, edges }
    }
}

impl fmt::Display for CastGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (actors, movies): (Vec<&str>, Vec<&str>) =
            self.vertices().partition(|v| self.is_actor(v));

        writeln!(f, "Vertices:")?;
        writeln!(f, "Actors: {}", actors.join(", "))?;
        writeln!(f, "Movies: {}", movies.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Edges:")?;
        for movie in movies {
            writeln!(f, "from {}: [{}]", movie, self.neighbors(movie).join(", "))?;
        }
        Ok(())
    }
}
