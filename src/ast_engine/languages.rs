//! Grammar-specific node kind classification.
//!
//! Maps tree-sitter node type strings to the closed set of kinds relevant
//! for extraction. Everything else classifies as `Other`, which only
//! triggers recursion into children.

/// Node kinds relevant for entity extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Class,
    Function,
    Call,
    Other,
}

/// Classify a node type string for the named grammar.
pub fn classify(grammar: &str, node_type: &str) -> NodeKind {
    match grammar {
        "python" => python_node_kind(node_type),
        _ => NodeKind::Other,
    }
}

/// Python node type classification.
fn python_node_kind(node_type: &str) -> NodeKind {
    match node_type {
        "class_definition" => NodeKind::Class,
        "function_definition" => NodeKind::Function,
        "call" => NodeKind::Call,
        _ => NodeKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_classification() {
        assert_eq!(classify("python", "class_definition"), NodeKind::Class);
        assert_eq!(classify("python", "function_definition"), NodeKind::Function);
        assert_eq!(classify("python", "call"), NodeKind::Call);
        assert_eq!(classify("python", "identifier"), NodeKind::Other);
        assert_eq!(classify("python", "module"), NodeKind::Other);
    }

    #[test]
    fn test_unknown_grammar() {
        assert_eq!(classify("unknown", "class_definition"), NodeKind::Other);
    }
}
