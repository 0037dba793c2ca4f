//! Export commands - TGF graph file and FAME results file

use anyhow::{Context, Result};
use castgraph::config::ProjectConfig;
use castgraph::reporters;
use console::style;
use std::path::{Path, PathBuf};

/// Default TGF base name: config override, else the input path without its extension
fn default_tgf_name(input: &Path, config: &ProjectConfig) -> PathBuf {
    match &config.output.tgf_name {
        Some(name) => PathBuf::from(name),
        None => input.with_extension(""),
    }
}

/// Write the graph as `<name>.tgf`
pub fn tgf(input: &Path, config: &ProjectConfig, output: Option<PathBuf>) -> Result<()> {
    let graph = super::graph::load(input, config)?;
    let name = output.unwrap_or_else(|| default_tgf_name(input, config));

    let path = reporters::tgf::write(&graph, &name)
        .with_context(|| format!("Failed to write TGF for {}", name.display()))?;

    println!(
        "{} Wrote {} vertices and {} edges to {}",
        style("✓").green(),
        graph.vertex_count(),
        graph.adjacency_entry_count(),
        style(path.display()).cyan()
    );
    Ok(())
}

/// Run the FAME test, print results and write the results file
pub fn fame(input: &Path, config: &ProjectConfig, output: Option<PathBuf>) -> Result<()> {
    let graph = super::graph::load(input, config)?;
    let report = graph.fame(&config.fame);
    let path = output.unwrap_or_else(|| PathBuf::from(&config.output.report_file));

    for (movie, result) in report.iter() {
        let mark = if result.passed {
            style("PASS").green()
        } else {
            style("FAIL").red()
        };
        println!(
            "  {}  {} ({}/{} female leads)",
            mark, movie, result.female_leads, result.leads
        );
    }

    reporters::fame::write(&report, &path)
        .with_context(|| format!("Failed to write FAME results to {}", path.display()))?;

    println!(
        "\n{} {}/{} movies passed, results in {}",
        style("✓").green(),
        report.passed_count(),
        report.len(),
        style(path.display()).cyan()
    );
    Ok(())
}
