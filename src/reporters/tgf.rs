//! Trivial Graph Format export
//!
//! ```text
//! 1 Up
//! 2 Ed
//! #
//! 1 2
//! 2 1
//! ```
//!
//! One line per vertex (1-based index, label), a lone `#`, then one line per
//! directed adjacency entry. Every credit shows up in both directions.

use crate::error::{CastError, Result};
use crate::graph::CastGraph;
use std::path::{Path, PathBuf};
use tracing::info;

/// Separator between the vertex and edge sections
pub const SECTION_SEPARATOR: &str = "#";

/// Render the graph as TGF
pub fn render(graph: &CastGraph) -> String {
    let view = graph.tgf_view();
    let mut out = String::new();

    for (index, label) in &view.vertices {
        out.push_str(&format!("{} {}\n", index, label));
    }
    out.push_str(SECTION_SEPARATOR);
    out.push('\n');
    for (source, target) in &view.edges {
        out.push_str(&format!("{} {}\n", source, target));
    }

    out
}

/// Output path for a TGF base name (`.tgf` appended unless already present)
pub fn tgf_path(name: &Path) -> PathBuf {
    if name.extension().is_some_and(|ext| ext == "tgf") {
        name.to_path_buf()
    } else {
        let mut path = name.as_os_str().to_owned();
        path.push(".tgf");
        PathBuf::from(path)
    }
}

/// Write the graph to `<name>.tgf`, returning the path written
pub fn write(graph: &CastGraph, name: &Path) -> Result<PathBuf> {
    let path = tgf_path(name);
    super::write_atomic(&path, &render(graph))?;
    info!("Wrote {} vertices to {}", graph.vertex_count(), path.display());
    Ok(path)
}

/// A parsed TGF document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TgfDocument {
    pub vertices: Vec<(usize, String)>,
    pub edges: Vec<(usize, usize)>,
}

fn parse_index(token: &str, line: usize) -> Result<usize> {
    token.parse().map_err(|_| CastError::MalformedTgf {
        line,
        reason: format!("'{}' is not a vertex index", token),
    })
}

/// Parse a TGF document (vertex section, `#`, edge section)
pub fn parse(text: &str) -> Result<TgfDocument> {
    let mut doc = TgfDocument::default();
    let mut in_edges = false;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line == SECTION_SEPARATOR {
            if in_edges {
                return Err(CastError::MalformedTgf {
                    line: line_no,
                    reason: "second section separator".to_string(),
                });
            }
            in_edges = true;
            continue;
        }

        if in_edges {
            let mut parts = line.split_whitespace();
            let (Some(source), Some(target)) = (parts.next(), parts.next()) else {
                return Err(CastError::MalformedTgf {
                    line: line_no,
                    reason: "edge needs a source and a target".to_string(),
                });
            };
            doc.edges
                .push((parse_index(source, line_no)?, parse_index(target, line_no)?));
        } else {
            // Labels may contain spaces; only the first token is the index
            let (index, label) = line.split_once(' ').unwrap_or((line, ""));
            doc.vertices
                .push((parse_index(index, line_no)?, label.to_string()));
        }
    }

    if !in_edges {
        return Err(CastError::MalformedTgf {
            line: text.lines().count(),
            reason: "missing '#' section separator".to_string(),
        });
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_graph;

    #[test]
    fn test_render_layout() {
        let mut graph = CastGraph::new();
        graph.add_edge("Up", "Ed");
        assert_eq!(render(&graph), "1 Up\n2 Ed\n#\n1 2\n2 1\n");
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(render(&CastGraph::new()), "#\n");
        let doc = parse("#\n").expect("parse empty");
        assert!(doc.vertices.is_empty());
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_reparse_matches_graph_counts() {
        let graph = test_graph();
        let doc = parse(&render(&graph)).expect("parse rendered TGF");

        assert_eq!(doc.vertices.len(), graph.vertex_count());
        assert_eq!(doc.edges.len(), graph.adjacency_entry_count());
        // Ed is credited on both movies: 2 entries out, 2 entries in
        let ed = doc
            .vertices
            .iter()
            .find(|(_, label)| label == "Ed")
            .map(|(i, _)| *i)
            .expect("Ed listed");
        assert_eq!(doc.edges.iter().filter(|(s, _)| *s == ed).count(), 2);
        assert_eq!(doc.edges.iter().filter(|(_, t)| *t == ed).count(), 2);
    }

    #[test]
    fn test_labels_with_spaces() {
        let doc = parse("1 The Jungle Book\n2 Neel Sethi\n#\n1 2\n").expect("parse");
        assert_eq!(doc.vertices[0], (1, "The Jungle Book".to_string()));
        assert_eq!(doc.edges, vec![(1, 2)]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse("1 Up\n"),
            Err(CastError::MalformedTgf { .. })
        ));
        assert!(matches!(
            parse("x Up\n#\n"),
            Err(CastError::MalformedTgf { line: 1, .. })
        ));
        assert!(matches!(
            parse("1 Up\n#\n1\n"),
            Err(CastError::MalformedTgf { line: 3, .. })
        ));
        assert!(matches!(
            parse("#\n#\n"),
            Err(CastError::MalformedTgf { line: 2, .. })
        ));
    }

    #[test]
    fn test_tgf_path() {
        assert_eq!(tgf_path(Path::new("cast")), PathBuf::from("cast.tgf"));
        assert_eq!(tgf_path(Path::new("cast.tgf")), PathBuf::from("cast.tgf"));
        assert_eq!(
            tgf_path(Path::new("nextBechdel_castGender")),
            PathBuf::from("nextBechdel_castGender.tgf")
        );
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let graph = test_graph();
        let path = write(&graph, &dir.path().join("cast")).expect("write TGF");

        assert_eq!(path, dir.path().join("cast.tgf"));
        let text = std::fs::read_to_string(&path).expect("read TGF");
        assert_eq!(text, render(&graph));
    }
}
