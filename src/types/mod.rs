//! Core types for the structural index.
//!
//! This module provides:
//! - Entity types extracted from syntax trees (classes, functions, calls)
//! - Indexer configuration

pub mod config;
pub mod entities;

pub use config::IndexConfig;
pub use entities::{CallExpression, ClassEntity, ExtractionResult, FunctionEntity};
