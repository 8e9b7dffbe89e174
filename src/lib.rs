//! Structural Repository Indexer
//!
//! Ingests a local source-code repository and produces a structural index:
//! an ignore-aware file tree, plus the classes, functions, and call
//! expressions declared in each source file. The index is consumed by a
//! downstream documentation-generation service.

pub mod ast_engine;
pub mod error;
pub mod file_tree;
pub mod indexer;
pub mod processing;
pub mod types;

pub use ast_engine::{extract_entities, Grammar, SourceParser, SyntaxTree};
pub use error::{IndexError, Result};
pub use file_tree::{FileTree, TreeBuilder};
pub use indexer::{RepoIndex, RepoIndexer};
pub use types::{CallExpression, ClassEntity, ExtractionResult, FunctionEntity, IndexConfig};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::ast_engine::{extract_entities, Grammar, SourceParser};
    pub use crate::file_tree::{FileTree, TreeBuilder};
    pub use crate::indexer::*;
    pub use crate::types::*;
}

/// Key under which the scanned root directory appears in a file tree
pub const ROOT_DIR_KEY: &str = ".";

/// Maximum file size considered for parsing (1MB)
pub const DEFAULT_MAX_FILE_SIZE: usize = 1024 * 1024;

/// Sample size used when sniffing for binary content
pub const BINARY_SNIFF_BYTES: usize = 8192;
