//! Ignore-aware file tree construction.
//!
//! Walks a repository directory and produces a mapping from relative
//! directory path to the file names directly inside it. Ignored
//! directories (version control metadata, dependency directories,
//! bytecode caches) never appear, nor does anything beneath them.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{IndexError, Result};
use crate::ROOT_DIR_KEY;

/// Mapping from relative directory path (`/`-separated, root is `"."`) to
/// the lexicographically ordered file names directly in that directory.
pub type FileTree = BTreeMap<String, Vec<String>>;

lazy_static::lazy_static! {
    static ref DEFAULT_IGNORED_DIRS: HashSet<String> = [
        // Version control
        ".git",
        ".svn",
        ".hg",
        // Dependencies
        "node_modules",
        "vendor",
        ".venv",
        "venv",
        // Bytecode and tool caches
        "__pycache__",
        ".pytest_cache",
        ".mypy_cache",
        // Build output
        "target",
        "build",
        "dist",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
}

/// Builds an ignore-filtered file tree for a repository directory.
pub struct TreeBuilder {
    ignored_dirs: HashSet<String>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Create a builder with the default ignore set.
    pub fn new() -> Self {
        Self {
            ignored_dirs: DEFAULT_IGNORED_DIRS.clone(),
        }
    }

    /// Add a directory name to the ignore set.
    pub fn ignore(mut self, name: &str) -> Self {
        self.ignored_dirs.insert(name.to_string());
        self
    }

    /// Add several directory names to the ignore set.
    pub fn ignore_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.ignored_dirs.insert(name.as_ref().to_string());
        }
        self
    }

    /// Check whether a directory name is in the ignore set.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }

    /// Build the file tree rooted at `root`.
    ///
    /// Fails with a filesystem error when the root is missing or
    /// unreadable. Read errors on entries deeper in the tree are logged
    /// and skipped.
    pub fn build(&self, root: &Path) -> Result<FileTree> {
        let meta =
            std::fs::metadata(root).map_err(|e| IndexError::filesystem(root, e))?;
        if !meta.is_dir() {
            return Err(IndexError::filesystem(
                root,
                io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }

        let mut tree = FileTree::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !self.is_ignored(&name)
            });

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 {
                        // Could not open the root itself
                        let io_err = err.into_io_error().unwrap_or_else(|| {
                            io::Error::new(io::ErrorKind::Other, "directory walk failed")
                        });
                        return Err(IndexError::filesystem(root, io_err));
                    }
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                tree.entry(relative_key(root, entry.path())).or_default();
            } else if entry.file_type().is_file() {
                let parent = entry.path().parent().unwrap_or(root);
                let name = entry.file_name().to_string_lossy().to_string();
                tree.entry(relative_key(root, parent)).or_default().push(name);
            }
        }

        debug!(
            "Built file tree for {}: {} directories",
            root.display(),
            tree.len()
        );
        Ok(tree)
    }
}

/// Relative, `/`-separated key for a directory; the root maps to `"."`.
fn relative_key(root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    if relative.as_os_str().is_empty() {
        return ROOT_DIR_KEY.to_string();
    }
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
