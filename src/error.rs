//! Error types for castgraph

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading, querying or exporting a cast graph
#[derive(Error, Debug)]
pub enum CastError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{label}' not found in the graph")]
    VertexNotFound { label: String },

    #[error("No path found between {from} and {to}")]
    NoPath { from: String, to: String },

    #[error("Malformed TGF at line {line}: {reason}")]
    MalformedTgf { line: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CastError>;

impl CastError {
    /// Map an IO error to `FileNotFound` or `Io`, keeping the offending path
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            CastError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CastError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_maps_not_found() {
        let err = CastError::io(
            Path::new("missing.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, CastError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_io_keeps_other_kinds() {
        let err = CastError::io(
            Path::new("locked.txt"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CastError::Io { .. }));
    }

    #[test]
    fn test_not_found_variants() {
        let missing = CastError::VertexNotFound {
            label: "Nobody".into(),
        };
        let unreachable = CastError::NoPath {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(missing.to_string(), "'Nobody' not found in the graph");
        assert_eq!(unreachable.to_string(), "No path found between A and B");
    }
}
