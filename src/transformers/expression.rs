//! Canonical source rendering for argument expressions.
//!
//! Only the node kinds that appear as assertion arguments in the dataset are
//! rendered; everything else is an `UnsupportedConstruct` or
//! `UnknownConstruct` error and rejects the exercise.

use crate::core::ast::{Expression, Literal, Property, PropertyKey};
use crate::core::{Result, TransformError};
use std::fmt::Write;

/// Render an expression back to JavaScript source.
pub fn serialize(expression: &Expression) -> Result<String> {
    match expression {
        Expression::Call { callee, arguments } => {
            let Expression::Identifier(name) = callee.as_ref() else {
                return Err(TransformError::unsupported(format!(
                    "call through a `{}` callee",
                    callee.kind()
                )));
            };
            Ok(format!("{}({})", name, serialize_list(arguments)?))
        }
        Expression::Literal(literal) => Ok(serialize_literal(literal)),
        Expression::Unary {
            operator,
            argument,
            prefix,
        } => serialize_unary(operator, argument, *prefix),
        Expression::Array { elements } => Ok(format!("[{}]", serialize_list(elements)?)),
        Expression::Identifier(name) => Ok(name.clone()),
        Expression::Object { properties } => serialize_object(properties),
        Expression::New { callee, arguments } => {
            let Expression::Identifier(name) = callee.as_ref() else {
                return Err(TransformError::unsupported(format!(
                    "`new` through a `{}` callee",
                    callee.kind()
                )));
            };
            Ok(format!("new {}({})", name, serialize_list(arguments)?))
        }
        Expression::Template {
            quasis,
            expressions,
        } => match (quasis.as_slice(), expressions.is_empty()) {
            ([raw], true) => Ok(format!("`{raw}`")),
            _ => Err(TransformError::unsupported(
                "template literal with interpolations",
            )),
        },
        Expression::Function { .. } => Err(TransformError::unsupported(
            "function expression as an argument",
        )),
        Expression::Member { .. } | Expression::Other { .. } => {
            Err(TransformError::unknown(expression.kind()))
        }
    }
}

fn serialize_list(expressions: &[Expression]) -> Result<String> {
    let parts = expressions
        .iter()
        .map(serialize)
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(", "))
}

pub fn serialize_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(value) => quote_string(value),
        Literal::Number(raw) => canonical_number(raw),
        Literal::Boolean(true) => "true".to_string(),
        Literal::Boolean(false) => "false".to_string(),
        Literal::Null => "undefined".to_string(),
    }
}

/// Single-quote a string value, escaping anything that would change its
/// meaning inside the quotes.
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Whole-number decimals lose their fractional zeros: `5.0` becomes `5`.
/// Any other number keeps its source spelling.
pub fn canonical_number(raw: &str) -> String {
    match raw.split_once('.') {
        Some((whole, fraction))
            if whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.bytes().all(|b| b == b'0')
                && !(whole.is_empty() && fraction.is_empty()) =>
        {
            if whole.is_empty() {
                "0".to_string()
            } else {
                whole.to_string()
            }
        }
        _ => raw.to_string(),
    }
}

fn serialize_unary(operator: &str, argument: &Expression, prefix: bool) -> Result<String> {
    let operand = serialize(argument)?;
    if !prefix {
        return Ok(format!("{operand}{operator}"));
    }

    let needs_space = operator.chars().all(|c| c.is_ascii_alphabetic())
        || matches!(
            (operator.chars().last(), operand.chars().next()),
            (Some('-'), Some('-')) | (Some('+'), Some('+'))
        );
    if needs_space {
        Ok(format!("{operator} {operand}"))
    } else {
        Ok(format!("{operator}{operand}"))
    }
}

/// Duplicate keys keep the position of their first occurrence and the value
/// of their last, matching how JavaScript builds the object.
fn serialize_object(properties: &[Property]) -> Result<String> {
    if properties.is_empty() {
        return Ok("{}".to_string());
    }

    let mut entries: Vec<(String, String)> = Vec::with_capacity(properties.len());
    for property in properties {
        let (key, value) = match property {
            Property::KeyValue { key, value } => (serialize_key(key)?, serialize(value)?),
            Property::Spread(_) => {
                return Err(TransformError::unsupported(
                    "spread element in an object literal",
                ))
            }
            Property::Other { kind } => return Err(TransformError::unknown(kind.as_str())),
        };

        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }

    let body = entries
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{{{body}}}"))
}

fn serialize_key(key: &PropertyKey) -> Result<String> {
    match key {
        PropertyKey::Identifier(name) => Ok(name.clone()),
        PropertyKey::Literal(literal) => Ok(serialize_literal(literal)),
        PropertyKey::Computed => Err(TransformError::unsupported("computed property key")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::Statement;
    use crate::parser::parse_program;

    fn render(source: &str) -> Result<String> {
        match parse_program(source)?.body.into_iter().next() {
            Some(Statement::Expression(expression)) => serialize(&expression),
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(quote_string("it's"), r"'it\'s'");
        assert_eq!(render(r#""hello";"#).unwrap(), "'hello'");
        assert_eq!(render(r#""a\\b";"#).unwrap(), r"'a\\b'");
        assert_eq!(render(r#""line\nbreak";"#).unwrap(), r"'line\nbreak'");
    }

    #[test]
    fn test_number_canonicalization() {
        assert_eq!(canonical_number("5.0"), "5");
        assert_eq!(canonical_number("5.00"), "5");
        assert_eq!(canonical_number("5."), "5");
        assert_eq!(canonical_number(".0"), "0");
        assert_eq!(canonical_number("5.5"), "5.5");
        assert_eq!(canonical_number("1.0e5"), "1.0e5");
        assert_eq!(canonical_number("0xff"), "0xff");
        assert_eq!(render("42;").unwrap(), "42");
    }

    #[test]
    fn test_keyword_literals() {
        assert_eq!(render("null;").unwrap(), "undefined");
        assert_eq!(render("undefined;").unwrap(), "undefined");
        assert_eq!(render("true;").unwrap(), "true");
        assert_eq!(render("false;").unwrap(), "false");
    }

    #[test]
    fn test_unary_expressions() {
        assert_eq!(render("-9;").unwrap(), "-9");
        assert_eq!(render("!true;").unwrap(), "!true");
        assert_eq!(render("typeof x;").unwrap(), "typeof x");
        assert_eq!(render("- -1;").unwrap(), "- -1");
        assert_eq!(render("x++;").unwrap(), "x++");
    }

    #[test]
    fn test_arrays_and_calls() {
        assert_eq!(render("[1, 'a', [true]];").unwrap(), "[1, 'a', [true]]");
        assert_eq!(render("[];").unwrap(), "[]");
        assert_eq!(render("f(1,2,  g(3));").unwrap(), "f(1, 2, g(3))");
        assert_eq!(render("new Date(2019, 1, 1);").unwrap(), "new Date(2019, 1, 1)");
    }

    #[test]
    fn test_objects() {
        assert_eq!(render("({});").unwrap(), "{}");
        assert_eq!(render("({a: 1, 'b c': [2]});").unwrap(), "{a: 1, 'b c': [2]}");
        assert_eq!(render("({a: 1, b: 2, a: 3});").unwrap(), "{a: 3, b: 2}");
        assert_eq!(render("({1: 'x'});").unwrap(), "{1: 'x'}");
    }

    #[test]
    fn test_templates() {
        assert_eq!(render("`hello world`;").unwrap(), "`hello world`");
        assert!(matches!(
            render("`hello ${name}`;"),
            Err(TransformError::UnsupportedConstruct { .. })
        ));
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            render("Math.max(1, 2);"),
            Err(TransformError::UnsupportedConstruct { .. })
        ));
        assert!(matches!(
            render("f(function() { return 1; });"),
            Err(TransformError::UnsupportedConstruct { .. })
        ));
        assert!(matches!(
            render("f(() => 1);"),
            Err(TransformError::UnsupportedConstruct { .. })
        ));
        assert_eq!(
            render("1 + 2;"),
            Err(TransformError::unknown("binary_expression"))
        );
        assert_eq!(
            render("Math.PI;"),
            Err(TransformError::unknown("member_expression"))
        );
        assert!(matches!(
            render("({[k]: 1});"),
            Err(TransformError::UnsupportedConstruct { .. })
        ));
    }
}
