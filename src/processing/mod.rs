//! Per-file preparation for parsing.
//!
//! This module provides:
//! - Source file selection by extension
//! - Binary content detection
//! - Encoding validation and line ending normalization

pub mod loader;

pub use loader::{is_python_source, SourceLoader};
