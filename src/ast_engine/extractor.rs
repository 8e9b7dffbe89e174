//! Entity extraction over a parsed syntax tree.
//!
//! A pre-order, depth-first traversal driven by an explicit work stack,
//! so pathological nesting depth cannot overflow the call stack. Every
//! node is visited exactly once; children are visited left-to-right, so
//! each entity list preserves source order.

use tree_sitter::Node;

use crate::ast_engine::languages::NodeKind;
use crate::ast_engine::parser::SyntaxTree;
use crate::types::{CallExpression, ClassEntity, ExtractionResult, FunctionEntity};

/// Extract classes, functions, and call expressions from a syntax tree.
///
/// Pure and infallible: erroneous or incomplete subtrees simply
/// contribute nothing.
pub fn extract_entities(tree: &SyntaxTree) -> ExtractionResult {
    let source = tree.source();
    let grammar = tree.grammar();
    let mut result = ExtractionResult::default();

    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        match grammar.classify(node.kind()) {
            NodeKind::Class => {
                if let Some(class) = class_entity(&node, source) {
                    result.classes.push(class);
                }
            }
            NodeKind::Function => {
                if let Some(function) = function_entity(&node, source) {
                    result.functions.push(function);
                }
            }
            NodeKind::Call => {
                if let Some(call) = call_expression(&node, source) {
                    result.calls.push(call);
                }
            }
            NodeKind::Other => {}
        }

        // Push children reversed so they pop in left-to-right order.
        // Always recurse: declarations nest, and calls appear inside
        // bodies and inside each other's arguments.
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    result
}

fn class_entity(node: &Node, source: &[u8]) -> Option<ClassEntity> {
    let name = field_text(node, "name", source)?;
    let bases = match node.child_by_field_name("superclasses") {
        Some(list) => identifier_children(&list, source),
        None => Vec::new(),
    };
    Some(ClassEntity { name, bases })
}

fn function_entity(node: &Node, source: &[u8]) -> Option<FunctionEntity> {
    let name = field_text(node, "name", source)?;
    let params = match node.child_by_field_name("parameters") {
        Some(list) => identifier_children(&list, source),
        None => Vec::new(),
    };
    Some(FunctionEntity { name, params })
}

fn call_expression(node: &Node, source: &[u8]) -> Option<CallExpression> {
    // Callee text is taken verbatim from the span, whether it is a bare
    // name or a compound expression.
    let callee = field_text(node, "function", source)?;
    Some(CallExpression { callee })
}

/// Text of a named child slot, if the slot exists and decodes as UTF-8.
fn field_text(node: &Node, field: &str, source: &[u8]) -> Option<String> {
    let child = node.child_by_field_name(field)?;
    child.utf8_text(source).ok().map(str::to_string)
}

/// Texts of the direct children of `node` whose kind is `identifier`,
/// left-to-right. Defaulted, annotated, and unpacked parameters as well
/// as dotted base names are not direct identifier children, so they are
/// excluded.
fn identifier_children(node: &Node, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.kind() == "identifier")
        .filter_map(|child| child.utf8_text(source).ok().map(str::to_string))
        .collect()
}
