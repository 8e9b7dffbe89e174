//! Error types for the indexing pipeline.
//!
//! Filesystem errors abort the whole scan (no root, no tree); parse errors
//! are reserved for parser-internal failure. Per-file content problems are
//! never represented here - they become recorded failures on the index.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Unified error type for the indexer.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Grammar error: {0}")]
    Grammar(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl IndexError {
    /// Wrap an IO error with the path it occurred at.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
