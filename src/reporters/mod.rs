//! Output reporters for castgraph
//!
//! - `tgf` - Trivial Graph Format export (and a reader for checking it)
//! - `fame` - FAME results file (`Movie, FAME Results`)
//! - `text` - Terminal graph summary
//! - `json` - Machine-readable graph summary

pub mod fame;
mod json;
mod text;
pub mod tgf;

use crate::error::{CastError, Result};
use crate::graph::CastGraph;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!(
                "Unknown format '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a graph summary in the specified format
pub fn summary(graph: &CastGraph, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(graph)),
        OutputFormat::Json => json::render(graph),
    }
}

/// Write `contents` to `path` through a temp file and rename
///
/// The temp file gets a fresh unique name in the target directory, so no
/// existing sibling is touched. A failed write leaves no partial output at
/// `path`.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp_file = NamedTempFile::new_in(dir).map_err(|e| CastError::io(path, e))?;
    tmp_file
        .write_all(contents.as_bytes())
        .and_then(|_| tmp_file.flush())
        .map_err(|e| CastError::io(path, e))?;

    // Dropping the temp file on any error above removes it
    tmp_file
        .persist(path)
        .map_err(|e| CastError::io(path, e.error))?;
    Ok(())
}
