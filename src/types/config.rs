//! Configuration types for indexing.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_MAX_FILE_SIZE;

/// Global indexer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Directory names ignored in addition to the built-in defaults
    /// (version control metadata, dependency dirs, bytecode caches).
    pub extra_ignore_dirs: Vec<String>,

    /// Maximum file size in bytes considered for parsing.
    pub max_file_size: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extra_ignore_dirs: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl IndexConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            extra_ignore_dirs: std::env::var("INDEX_IGNORE_DIRS")
                .map(|s| {
                    s.split(',')
                        .map(|d| d.trim().to_string())
                        .filter(|d| !d.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            max_file_size: std::env::var("INDEX_MAX_FILE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_FILE_SIZE),
        }
    }

    /// Add an ignored directory name.
    pub fn with_ignore_dir(mut self, dir: &str) -> Self {
        self.extra_ignore_dirs.push(dir.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert!(config.extra_ignore_dirs.is_empty());
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn test_with_ignore_dir() {
        let config = IndexConfig::default()
            .with_ignore_dir("fixtures")
            .with_ignore_dir("snapshots");
        assert_eq!(config.extra_ignore_dirs, vec!["fixtures", "snapshots"]);
    }
}
