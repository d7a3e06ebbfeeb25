//! Lowering from the tree-sitter concrete tree to [`crate::core::ast`].
//!
//! Lowering is infallible: shapes outside the subset become `Other` nodes
//! and are rejected by whichever transform meets them.

use super::node_text;
use crate::core::ast::{
    Expression, Literal, Pattern, Program, Property, PropertyKey, Statement, VariableDeclarator,
};
use tree_sitter::Node;

pub(super) fn lower_program(root: Node, source: &str) -> Program {
    Program {
        body: significant_children(root)
            .into_iter()
            .map(|node| lower_statement(node, source))
            .collect(),
    }
}

/// Named children, minus comments
fn significant_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

fn other(node: Node) -> Expression {
    Expression::Other {
        kind: node.kind().to_string(),
    }
}

fn lower_statement(node: Node, source: &str) -> Statement {
    match node.kind() {
        "empty_statement" => Statement::Empty,
        "function_declaration" | "generator_function_declaration" => {
            match node.child_by_field_name("name") {
                Some(name) => Statement::FunctionDeclaration {
                    name: node_text(&name, source).to_string(),
                    params: lower_parameters(node, source),
                },
                None => Statement::Other {
                    kind: node.kind().to_string(),
                },
            }
        }
        "variable_declaration" | "lexical_declaration" => Statement::VariableDeclaration {
            declarations: significant_children(node)
                .into_iter()
                .filter(|child| child.kind() == "variable_declarator")
                .map(|declarator| lower_declarator(declarator, source))
                .collect(),
        },
        "expression_statement" => match significant_children(node).first() {
            Some(expression) => Statement::Expression(lower_expression(*expression, source)),
            None => Statement::Empty,
        },
        kind => Statement::Other {
            kind: kind.to_string(),
        },
    }
}

fn lower_declarator(node: Node, source: &str) -> VariableDeclarator {
    let id = match node.child_by_field_name("name") {
        Some(name) => lower_pattern(name, source),
        None => Pattern::Other {
            kind: node.kind().to_string(),
        },
    };
    VariableDeclarator {
        id,
        init: node
            .child_by_field_name("value")
            .map(|value| lower_expression(value, source)),
    }
}

fn lower_pattern(node: Node, source: &str) -> Pattern {
    match node.kind() {
        "identifier" => Pattern::Identifier(node_text(&node, source).to_string()),
        kind => Pattern::Other {
            kind: kind.to_string(),
        },
    }
}

/// Parameters of a function-like node. Arrow functions with a single bare
/// parameter use the `parameter` field instead of `parameters`.
fn lower_parameters(function: Node, source: &str) -> Vec<Pattern> {
    if let Some(parameters) = function.child_by_field_name("parameters") {
        significant_children(parameters)
            .into_iter()
            .map(|param| lower_pattern(param, source))
            .collect()
    } else if let Some(parameter) = function.child_by_field_name("parameter") {
        vec![lower_pattern(parameter, source)]
    } else {
        Vec::new()
    }
}

fn lower_expression(node: Node, source: &str) -> Expression {
    match node.kind() {
        "parenthesized_expression" => match significant_children(node).first() {
            Some(inner) => lower_expression(*inner, source),
            None => other(node),
        },
        "call_expression" => {
            match (
                node.child_by_field_name("function"),
                node.child_by_field_name("arguments"),
            ) {
                // Tagged templates put a template_string in `arguments`
                (Some(callee), Some(arguments)) if arguments.kind() == "arguments" => {
                    Expression::Call {
                        callee: Box::new(lower_expression(callee, source)),
                        arguments: lower_list(arguments, source),
                    }
                }
                _ => other(node),
            }
        }
        "member_expression" => match (
            node.child_by_field_name("object"),
            node.child_by_field_name("property"),
        ) {
            (Some(object), Some(property)) => Expression::Member {
                object: Box::new(lower_expression(object, source)),
                property: node_text(&property, source).to_string(),
            },
            _ => other(node),
        },
        "identifier" | "undefined" => Expression::Identifier(node_text(&node, source).to_string()),
        "string" => Expression::Literal(Literal::String(cook_string(node, source))),
        "number" => Expression::Literal(Literal::Number(node_text(&node, source).to_string())),
        "true" => Expression::Literal(Literal::Boolean(true)),
        "false" => Expression::Literal(Literal::Boolean(false)),
        "null" => Expression::Literal(Literal::Null),
        "unary_expression" | "update_expression" => lower_unary(node, source),
        "array" if has_holes(node) => Expression::Other {
            kind: "array_hole".to_string(),
        },
        "array" => Expression::Array {
            elements: lower_list(node, source),
        },
        "object" => Expression::Object {
            properties: significant_children(node)
                .into_iter()
                .map(|member| lower_property(member, source))
                .collect(),
        },
        "new_expression" => match node.child_by_field_name("constructor") {
            Some(constructor) => Expression::New {
                callee: Box::new(lower_expression(constructor, source)),
                arguments: node
                    .child_by_field_name("arguments")
                    .map(|arguments| lower_list(arguments, source))
                    .unwrap_or_default(),
            },
            None => other(node),
        },
        "template_string" => lower_template(node, source),
        "function_expression" | "function" | "generator_function" | "arrow_function" => {
            Expression::Function {
                params: lower_parameters(node, source),
            }
        }
        _ => other(node),
    }
}

fn lower_list(node: Node, source: &str) -> Vec<Expression> {
    significant_children(node)
        .into_iter()
        .map(|element| lower_expression(element, source))
        .collect()
}

/// True for elisions such as `[1,,2]` or `[,1]`; a single trailing comma
/// is not a hole.
fn has_holes(array: Node) -> bool {
    let mut cursor = array.walk();
    let mut after_separator = true;
    for child in array.children(&mut cursor) {
        match child.kind() {
            "[" | "]" | "comment" => {}
            "," if after_separator => return true,
            "," => after_separator = true,
            _ => after_separator = false,
        }
    }
    false
}

fn lower_unary(node: Node, source: &str) -> Expression {
    match (
        node.child_by_field_name("operator"),
        node.child_by_field_name("argument"),
    ) {
        (Some(operator), Some(argument)) => Expression::Unary {
            operator: node_text(&operator, source).to_string(),
            argument: Box::new(lower_expression(argument, source)),
            prefix: operator.start_byte() < argument.start_byte(),
        },
        _ => other(node),
    }
}

fn lower_property(node: Node, source: &str) -> Property {
    match node.kind() {
        "pair" => match (
            node.child_by_field_name("key"),
            node.child_by_field_name("value"),
        ) {
            (Some(key), Some(value)) => Property::KeyValue {
                key: lower_property_key(key, source),
                value: lower_expression(value, source),
            },
            _ => Property::Other {
                kind: node.kind().to_string(),
            },
        },
        "shorthand_property_identifier" => {
            let name = node_text(&node, source).to_string();
            Property::KeyValue {
                key: PropertyKey::Identifier(name.clone()),
                value: Expression::Identifier(name),
            }
        }
        "method_definition" => match node.child_by_field_name("name") {
            Some(name) => Property::KeyValue {
                key: lower_property_key(name, source),
                value: Expression::Function {
                    params: lower_parameters(node, source),
                },
            },
            None => Property::Other {
                kind: node.kind().to_string(),
            },
        },
        "spread_element" => match significant_children(node).first() {
            Some(argument) => Property::Spread(lower_expression(*argument, source)),
            None => Property::Other {
                kind: node.kind().to_string(),
            },
        },
        kind => Property::Other {
            kind: kind.to_string(),
        },
    }
}

fn lower_property_key(node: Node, source: &str) -> PropertyKey {
    match node.kind() {
        "property_identifier" | "identifier" => {
            PropertyKey::Identifier(node_text(&node, source).to_string())
        }
        "string" => PropertyKey::Literal(Literal::String(cook_string(node, source))),
        "number" => PropertyKey::Literal(Literal::Number(node_text(&node, source).to_string())),
        _ => PropertyKey::Computed,
    }
}

/// Split a template literal into its raw static segments and substitutions
fn lower_template(node: Node, source: &str) -> Expression {
    let mut quasis = Vec::new();
    let mut expressions = Vec::new();
    // Skip the opening and closing backticks
    let mut segment_start = node.start_byte() + 1;
    let end = node.end_byte().saturating_sub(1).max(segment_start);

    for substitution in significant_children(node)
        .into_iter()
        .filter(|child| child.kind() == "template_substitution")
    {
        quasis.push(source[segment_start..substitution.start_byte()].to_string());
        expressions.push(match significant_children(substitution).first() {
            Some(inner) => lower_expression(*inner, source),
            None => other(substitution),
        });
        segment_start = substitution.end_byte();
    }
    quasis.push(source[segment_start..end].to_string());

    Expression::Template {
        quasis,
        expressions,
    }
}

/// Decode a string literal's contents into its runtime value
fn cook_string(node: Node, source: &str) -> String {
    let mut value = String::new();
    for part in significant_children(node) {
        let text = node_text(&part, source);
        match part.kind() {
            "escape_sequence" => push_escape(&mut value, text),
            _ => value.push_str(text),
        }
    }
    value
}

fn push_escape(value: &mut String, escape: &str) {
    let body = escape.strip_prefix('\\').unwrap_or(escape);
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return;
    };

    match first {
        'n' => value.push('\n'),
        't' => value.push('\t'),
        'r' => value.push('\r'),
        'b' => value.push('\u{8}'),
        'f' => value.push('\u{c}'),
        'v' => value.push('\u{b}'),
        '0' if body.len() == 1 => value.push('\0'),
        'x' | 'u' => {
            let hex = chars.as_str().trim_start_matches('{').trim_end_matches('}');
            let decoded = u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            value.push(decoded);
        }
        // Line continuation
        '\r' | '\n' | '\u{2028}' | '\u{2029}' => {}
        other => value.push(other),
    }
}
