//! Repository indexing orchestrator.
//!
//! Builds the file tree, then parses each Python source file and merges
//! the per-file extraction results into one index. Single-file problems
//! are recorded as failures; only the absence of the root aborts the
//! whole operation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ast_engine::{extract_entities, Grammar, SourceParser};
use crate::error::Result;
use crate::file_tree::{FileTree, TreeBuilder};
use crate::processing::{is_python_source, SourceLoader};
use crate::types::{ExtractionResult, IndexConfig};
use crate::ROOT_DIR_KEY;

/// A file that could not be indexed, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    /// Repository-relative path.
    pub path: String,
    pub reason: String,
}

/// The structural index of one repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoIndex {
    /// Directory path -> file names directly inside it.
    pub file_tree: FileTree,
    /// Repository-relative source path -> extracted entities.
    pub files: BTreeMap<String, ExtractionResult>,
    /// Files skipped with a diagnostic instead of entities.
    pub failures: Vec<FileFailure>,
}

impl RepoIndex {
    /// Number of files that were parsed and extracted.
    pub fn indexed_file_count(&self) -> usize {
        self.files.len()
    }

    /// Total entities across all indexed files.
    pub fn entity_count(&self) -> usize {
        self.files.values().map(ExtractionResult::entity_count).sum()
    }
}

/// Coordinates tree building, file loading, parsing, and extraction.
pub struct RepoIndexer {
    tree_builder: TreeBuilder,
    parser: SourceParser,
    loader: SourceLoader,
}

impl RepoIndexer {
    /// Create an indexer for the given grammar and configuration.
    ///
    /// The grammar must already be constructed; it is bound once here and
    /// reused for every file.
    pub fn new(grammar: &Grammar, config: &IndexConfig) -> Result<Self> {
        Ok(Self {
            tree_builder: TreeBuilder::new().ignore_all(&config.extra_ignore_dirs),
            parser: SourceParser::new(grammar)?,
            loader: SourceLoader::new(config.max_file_size),
        })
    }

    /// Index the repository rooted at `root`.
    pub fn index(&mut self, root: &Path) -> Result<RepoIndex> {
        let file_tree = self.tree_builder.build(root)?;

        let mut files = BTreeMap::new();
        let mut failures = Vec::new();

        for (dir, names) in &file_tree {
            for name in names {
                if !is_python_source(name) {
                    continue;
                }

                let rel_path = if dir == ROOT_DIR_KEY {
                    name.clone()
                } else {
                    format!("{}/{}", dir, name)
                };

                match self.index_file(&root.join(&rel_path)) {
                    Ok(result) => {
                        debug!("Indexed {} ({} entities)", rel_path, result.entity_count());
                        files.insert(rel_path, result);
                    }
                    Err(reason) => {
                        debug!("Skipped {}: {}", rel_path, reason);
                        failures.push(FileFailure {
                            path: rel_path,
                            reason,
                        });
                    }
                }
            }
        }

        info!(
            "Indexed {}: {} files, {} entities, {} failures",
            root.display(),
            files.len(),
            files.values().map(ExtractionResult::entity_count).sum::<usize>(),
            failures.len()
        );

        Ok(RepoIndex {
            file_tree,
            files,
            failures,
        })
    }

    /// Load, parse, and extract one file; any problem becomes a reason
    /// string recorded against this file alone.
    fn index_file(&mut self, path: &Path) -> std::result::Result<ExtractionResult, String> {
        let content = self.loader.load(path)?;
        let tree = self
            .parser
            .parse(content.as_bytes())
            .map_err(|e| e.to_string())?;
        Ok(extract_entities(&tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn indexer() -> RepoIndexer {
        RepoIndexer::new(&Grammar::python(), &IndexConfig::default()).unwrap()
    }

    #[test]
    fn test_index_small_repository() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("animals.py"),
            "class Dog(Animal):\n    def bark(self):\n        print('woof')\n",
        )
        .unwrap();
        let pkg = temp.path().join("pkg");
        fs::create_dir(&pkg).unwrap();
        fs::write(pkg.join("util.py"), "def helper(x):\n    return x\n").unwrap();
        fs::write(temp.path().join("README.md"), "# Docs\n").unwrap();

        let index = indexer().index(temp.path()).unwrap();

        assert_eq!(index.indexed_file_count(), 2);
        assert!(index.failures.is_empty());

        let animals = &index.files["animals.py"];
        assert_eq!(animals.classes[0].name, "Dog");
        assert_eq!(animals.functions[0].name, "bark");
        assert_eq!(animals.calls[0].callee, "print");

        // Non-source files appear in the tree but are not parsed
        assert!(index.file_tree["."].contains(&"README.md".to_string()));
        assert!(!index.files.contains_key("README.md"));
    }

    #[test]
    fn test_ignored_directories_are_not_indexed() {
        let temp = tempdir().unwrap();
        let git = temp.path().join(".git");
        fs::create_dir(&git).unwrap();
        fs::write(git.join("hook.py"), "def h(): pass\n").unwrap();
        fs::write(temp.path().join("main.py"), "def main(): pass\n").unwrap();

        let index = indexer().index(temp.path()).unwrap();

        assert_eq!(index.indexed_file_count(), 1);
        assert!(index.files.contains_key("main.py"));
        assert!(!index.file_tree.contains_key(".git"));
    }

    #[test]
    fn test_broken_file_does_not_abort_the_scan() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("good.py"), "def ok(): pass\n").unwrap();
        fs::write(temp.path().join("blob.py"), b"\x00\x01\x02\x03").unwrap();

        let index = indexer().index(temp.path()).unwrap();

        assert_eq!(index.indexed_file_count(), 1);
        assert_eq!(index.failures.len(), 1);
        assert_eq!(index.failures[0].path, "blob.py");
        assert!(index.failures[0].reason.contains("Binary"));
    }

    #[test]
    fn test_missing_root_aborts() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        assert!(indexer().index(&missing).is_err());
    }

    #[test]
    fn test_index_serializes_to_json() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.py"), "run()\n").unwrap();

        let index = indexer().index(temp.path()).unwrap();
        let json = serde_json::to_string(&index).unwrap();

        assert!(json.contains("\"file_tree\""));
        assert!(json.contains("\"run\""));
    }
}
