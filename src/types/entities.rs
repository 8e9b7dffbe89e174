//! Entities extracted from a single source file.
//!
//! All sequences preserve pre-order, depth-first source order and are not
//! deduplicated; the same name or callee can legitimately repeat.

use serde::{Deserialize, Serialize};

/// A class declaration with its explicit base types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntity {
    /// Declared class name.
    pub name: String,
    /// Bare-identifier base names, left-to-right. Empty when the
    /// declaration carries no superclass list. Attribute-form bases
    /// (e.g. `module.Base`) are excluded.
    pub bases: Vec<String>,
}

/// A function declaration with its identifier-shaped parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEntity {
    /// Declared function name.
    pub name: String,
    /// Plain identifier parameters in declaration order. Parameters with
    /// defaults, annotations, or unpacking markers are excluded.
    pub params: Vec<String>,
}

/// A call expression found anywhere in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Verbatim source text of the invoked expression, which may be a bare
    /// name or a dotted/attribute expression.
    pub callee: String,
}

/// Everything extracted from one file's syntax tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub classes: Vec<ClassEntity>,
    pub functions: Vec<FunctionEntity>,
    pub calls: Vec<CallExpression>,
}

impl ExtractionResult {
    /// Check whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty() && self.calls.is_empty()
    }

    /// Total number of extracted entities across all three lists.
    pub fn entity_count(&self) -> usize {
        self.classes.len() + self.functions.len() + self.calls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ExtractionResult::default();
        assert!(result.is_empty());
        assert_eq!(result.entity_count(), 0);
    }

    #[test]
    fn test_entity_count() {
        let result = ExtractionResult {
            classes: vec![ClassEntity {
                name: "Dog".to_string(),
                bases: vec!["Animal".to_string()],
            }],
            functions: vec![FunctionEntity {
                name: "greet".to_string(),
                params: vec!["name".to_string()],
            }],
            calls: vec![CallExpression {
                callee: "print".to_string(),
            }],
        };
        assert!(!result.is_empty());
        assert_eq!(result.entity_count(), 3);
    }

    #[test]
    fn test_serde_round_trip() {
        let result = ExtractionResult {
            classes: vec![],
            functions: vec![FunctionEntity {
                name: "main".to_string(),
                params: vec![],
            }],
            calls: vec![CallExpression {
                callee: "app.run".to_string(),
            }],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
