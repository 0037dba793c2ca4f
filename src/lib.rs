//! castgraph - movie/actor graph analysis
//!
//! Builds a bipartite graph of movies and actors from a cast/gender table,
//! answers "movies separating two actors" queries, and runs the FAME test
//! (at least half of lead roles female) per movie.
//!
//! ```no_run
//! use castgraph::config::ProjectConfig;
//! use castgraph::graph::CastGraph;
//! use std::path::Path;
//!
//! let config = ProjectConfig::default();
//! let graph = CastGraph::load(Path::new("nextBechdel_castGender.txt"), &config.input)?;
//! let hops = graph.separation("Megan Fox", "Tyler Perry")?;
//! let fame = graph.fame(&config.fame);
//! # Ok::<(), castgraph::error::CastError>(())
//! ```

pub mod config;
pub mod error;
pub mod fame;
pub mod graph;
pub mod records;
pub mod reporters;

pub use error::{CastError, Result};
pub use graph::CastGraph;
