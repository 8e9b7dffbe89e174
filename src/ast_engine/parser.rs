//! Tree-sitter based source parsing.
//!
//! Grammar construction is a one-time, process-lifetime step; the
//! resulting `Grammar` is read-only and shareable. Parsing is
//! error-tolerant: malformed source still yields a best-effort tree with
//! erroneous subtrees marked, never a parse error.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::ast_engine::languages::{self, NodeKind};
use crate::error::{IndexError, Result};

/// A loaded tree-sitter grammar plus its node classification.
#[derive(Clone)]
pub struct Grammar {
    name: &'static str,
    language: Language,
}

impl Grammar {
    /// Load the Python grammar.
    pub fn python() -> Self {
        Self {
            name: "python",
            language: tree_sitter_python::language(),
        }
    }

    /// Grammar name (e.g. "python").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying tree-sitter language.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Classify a node type string against this grammar.
    pub fn classify(&self, node_type: &str) -> NodeKind {
        languages::classify(self.name, node_type)
    }
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar").field("name", &self.name).finish()
    }
}

/// The syntax tree of one file, owning the content it was parsed from.
pub struct SyntaxTree {
    tree: Tree,
    source: Vec<u8>,
    grammar: Grammar,
}

impl SyntaxTree {
    /// Root node of the tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The source bytes this tree was parsed from.
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// The grammar the tree was parsed with.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Whether any subtree is marked as erroneous.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Parser bound to one grammar, reusable across files.
pub struct SourceParser {
    grammar: Grammar,
    parser: Parser,
}

impl SourceParser {
    /// Bind a parser to an already-constructed grammar.
    pub fn new(grammar: &Grammar) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(grammar.language())
            .map_err(|e| IndexError::Grammar(e.to_string()))?;
        Ok(Self {
            grammar: grammar.clone(),
            parser,
        })
    }

    /// Parse source content into a syntax tree.
    ///
    /// Fails only on parser-internal failure; malformed content yields a
    /// tree with error nodes.
    pub fn parse(&mut self, content: &[u8]) -> Result<SyntaxTree> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| IndexError::Parse("parser produced no tree".to_string()))?;

        Ok(SyntaxTree {
            tree,
            source: content.to_vec(),
            grammar: self.grammar.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_python() {
        let grammar = Grammar::python();
        let mut parser = SourceParser::new(&grammar).unwrap();

        let tree = parser
            .parse(b"def hello():\n    return 1\n")
            .unwrap();

        assert!(!tree.has_errors());
        assert_eq!(tree.root().kind(), "module");
    }

    #[test]
    fn test_malformed_source_still_yields_a_tree() {
        let grammar = Grammar::python();
        let mut parser = SourceParser::new(&grammar).unwrap();

        let tree = parser.parse(b"def broken(:\n").unwrap();

        assert!(tree.has_errors());
    }

    #[test]
    fn test_parser_is_reusable_across_files() {
        let grammar = Grammar::python();
        let mut parser = SourceParser::new(&grammar).unwrap();

        let first = parser.parse(b"x = 1\n").unwrap();
        let second = parser.parse(b"y = 2\n").unwrap();

        assert!(!first.has_errors());
        assert!(!second.has_errors());
    }

    #[test]
    fn test_grammar_classifies_node_types() {
        let grammar = Grammar::python();
        assert_eq!(grammar.classify("class_definition"), NodeKind::Class);
        assert_eq!(grammar.classify("comment"), NodeKind::Other);
    }
}
