//! Graph commands - load a cast table and query it

use anyhow::{Context, Result};
use castgraph::config::ProjectConfig;
use castgraph::graph::CastGraph;
use castgraph::reporters::{self, OutputFormat};
use console::style;
use std::path::Path;
use std::str::FromStr;

/// Load the cast table named on the command line
pub(super) fn load(input: &Path, config: &ProjectConfig) -> Result<CastGraph> {
    CastGraph::load(input, &config.input)
        .with_context(|| format!("Failed to load cast table {}", input.display()))
}

/// Print graph counts and listing
pub fn summary(input: &Path, config: &ProjectConfig, format: &str) -> Result<()> {
    let graph = load(input, config)?;
    let format = OutputFormat::from_str(format)?;
    println!("{}", reporters::summary(&graph, format)?);
    Ok(())
}

/// Print the number of movies separating two actors
pub fn separation(input: &Path, config: &ProjectConfig, actor_a: &str, actor_b: &str) -> Result<()> {
    let graph = load(input, config)?;
    let hops = graph.separation(actor_a, actor_b)?;
    println!(
        "Separation between {} and {}: {}",
        style(actor_a).cyan(),
        style(actor_b).cyan(),
        style(hops).bold()
    );
    Ok(())
}

/// List the movies an actor appears in
pub fn movies(input: &Path, config: &ProjectConfig, actor: &str) -> Result<()> {
    let graph = load(input, config)?;
    let movies = graph.movies_by_actor(actor);
    if movies.is_empty() {
        anyhow::bail!("No movies found for {}", actor);
    }

    println!("\nMovies played by {} ({})\n", style(actor).cyan(), movies.len());
    for movie in &movies {
        println!("  {}", movie);
    }
    Ok(())
}

/// List the actors credited on a movie
pub fn actors(input: &Path, config: &ProjectConfig, movie: &str) -> Result<()> {
    let graph = load(input, config)?;
    let actors = graph.actors_from_movie(movie);
    if actors.is_empty() {
        anyhow::bail!("No actors found for {}", movie);
    }

    println!("\nActors in the movie {} ({})\n", style(movie).cyan(), actors.len());
    for actor in &actors {
        println!("  {}", actor);
    }
    Ok(())
}
