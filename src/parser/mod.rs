//! Tree-sitter parser integration for JavaScript
//!
//! Parses source with the tree-sitter JavaScript grammar and lowers the
//! concrete tree into the owned [`Program`] representation.

mod lower;

use crate::core::ast::Program;
use crate::core::{Result, TransformError};
use tree_sitter::{Node, Parser, Tree};

/// Parse JavaScript source into the owned syntax tree.
///
/// Any syntax error in the source fails the whole parse; the transforms
/// never work from a partially recovered tree.
pub fn parse_program(source: &str) -> Result<Program> {
    let tree = parse_tree(source)?;
    let root = tree.root_node();

    if let Some(error) = first_error(root) {
        return Err(TransformError::parse(format!(
            "syntax error at line {}, column {}",
            node_line(&error),
            node_column(&error)
        )));
    }

    Ok(lower::lower_program(root, source))
}

fn parse_tree(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| TransformError::parse(format!("failed to set JavaScript language: {e}")))?;

    parser
        .parse(source, None)
        .ok_or_else(|| TransformError::parse("failed to parse source code"))
}

/// Find the first ERROR or MISSING node in document order
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Get text for a tree-sitter node
pub(crate) fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub(crate) fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub(crate) fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}
