//! Bipartite movie/actor graph
//!
//! Pure Rust implementation on petgraph: the store owns vertices and
//! adjacency, traversal answers separation queries over it.

pub mod store;
pub mod store_models;
pub mod traversal;

pub use store::CastGraph;
pub use store_models::{GraphStats, TgfView, VertexKind};
pub use traversal::separation;
