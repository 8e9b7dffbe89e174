//! AST engine for code parsing and entity extraction.
//!
//! This module provides:
//! - One-time grammar construction shared across all parses
//! - Error-tolerant tree-sitter parsing of source content
//! - Stack-based entity extraction (classes, functions, calls)

pub mod extractor;
pub mod languages;
pub mod parser;

pub use extractor::extract_entities;
pub use languages::NodeKind;
pub use parser::{Grammar, SourceParser, SyntaxTree};
