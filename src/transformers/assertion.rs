//! Rewrites one `Test.<method>(...)` call into a Jest assertion.

use super::expression::serialize;
use crate::core::ast::Expression;
use crate::core::{Assertion, Result, TransformError};

/// Assertion methods of the dataset's `Test` object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionMethod {
    Equals,
    Similar,
    NotEquals,
}

impl AssertionMethod {
    /// Any name outside the three known methods is a logic error: the
    /// dataset is assumed to use nothing else.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "assertEquals" => Ok(Self::Equals),
            "assertSimilar" => Ok(Self::Similar),
            "assertNotEquals" => Ok(Self::NotEquals),
            other => Err(TransformError::UnknownAssertionMethod(other.to_string())),
        }
    }

    pub fn is_inverted(self) -> bool {
        self == Self::NotEquals
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenAssertion {
    pub assertion: Assertion,
    /// Callee of the first of `actual`/`expected` that is a plain call
    pub function_under_test: Option<String>,
}

/// `Test.assertEquals(actual, expected, name)` becomes
/// `expect(actual).toEqual(expected);`. A missing `expected` means
/// `undefined`.
pub fn rewrite_assertion(
    method: AssertionMethod,
    arguments: &[Expression],
) -> Result<RewrittenAssertion> {
    let (actual, expected, name) = match arguments {
        [actual] => (actual, None, None),
        [actual, expected] => (actual, Some(expected), None),
        [actual, expected, name] => (actual, Some(expected), Some(name)),
        _ => {
            return Err(TransformError::unsupported(format!(
                "Test.{} with {} arguments",
                method_name(method),
                arguments.len()
            )))
        }
    };

    let actual_code = serialize(actual)?;
    let expected_code = match expected {
        Some(expected) => serialize(expected)?,
        None => "undefined".to_string(),
    };
    let name = name.map(serialize).transpose()?;

    let negation = if method.is_inverted() { ".not" } else { "" };
    let code = format!("expect({actual_code}){negation}.toEqual({expected_code});");

    let function_under_test = std::iter::once(actual)
        .chain(expected)
        .find_map(Expression::called_name)
        .map(str::to_string);

    Ok(RewrittenAssertion {
        assertion: Assertion::new(code, name),
        function_under_test,
    })
}

fn method_name(method: AssertionMethod) -> &'static str {
    match method {
        AssertionMethod::Equals => "assertEquals",
        AssertionMethod::Similar => "assertSimilar",
        AssertionMethod::NotEquals => "assertNotEquals",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::Literal;

    fn call(name: &str, arguments: Vec<Expression>) -> Expression {
        Expression::Call {
            callee: Box::new(Expression::Identifier(name.into())),
            arguments,
        }
    }

    fn number(raw: &str) -> Expression {
        Expression::Literal(Literal::Number(raw.into()))
    }

    #[test]
    fn test_method_names() {
        assert_eq!(
            AssertionMethod::from_name("assertSimilar").unwrap(),
            AssertionMethod::Similar
        );
        assert!(AssertionMethod::from_name("assertNotEquals")
            .unwrap()
            .is_inverted());
        assert!(!AssertionMethod::from_name("assertEquals")
            .unwrap()
            .is_inverted());
        assert_eq!(
            AssertionMethod::from_name("expect"),
            Err(TransformError::UnknownAssertionMethod("expect".into()))
        );
    }

    #[test]
    fn test_basic_rewrite() {
        let rewritten = rewrite_assertion(
            AssertionMethod::Equals,
            &[call("double", vec![number("3")]), number("6")],
        )
        .unwrap();
        assert_eq!(rewritten.assertion.code, "expect(double(3)).toEqual(6);");
        assert_eq!(rewritten.assertion.name, None);
        assert_eq!(rewritten.function_under_test.as_deref(), Some("double"));
    }

    #[test]
    fn test_inverted_rewrite() {
        let rewritten = rewrite_assertion(
            AssertionMethod::NotEquals,
            &[
                call("isEven", vec![number("3")]),
                Expression::Literal(Literal::Boolean(true)),
            ],
        )
        .unwrap();
        assert_eq!(
            rewritten.assertion.code,
            "expect(isEven(3)).not.toEqual(true);"
        );
    }

    #[test]
    fn test_missing_expected_defaults_to_undefined() {
        let rewritten =
            rewrite_assertion(AssertionMethod::Equals, &[call("noop", vec![])]).unwrap();
        assert_eq!(rewritten.assertion.code, "expect(noop()).toEqual(undefined);");
    }

    #[test]
    fn test_named_assertion_and_function_from_expected() {
        let rewritten = rewrite_assertion(
            AssertionMethod::Similar,
            &[
                number("6"),
                call("double", vec![number("3")]),
                Expression::Literal(Literal::String("doubles".into())),
            ],
        )
        .unwrap();
        assert_eq!(rewritten.assertion.name.as_deref(), Some("'doubles'"));
        assert_eq!(rewritten.function_under_test.as_deref(), Some("double"));
    }

    #[test]
    fn test_no_function_under_test() {
        let rewritten =
            rewrite_assertion(AssertionMethod::Equals, &[number("1"), number("1")]).unwrap();
        assert_eq!(rewritten.function_under_test, None);
    }

    #[test]
    fn test_argument_count_limits() {
        assert!(matches!(
            rewrite_assertion(AssertionMethod::Equals, &[]),
            Err(TransformError::UnsupportedConstruct { .. })
        ));
        let four = vec![number("1"), number("2"), number("3"), number("4")];
        assert!(matches!(
            rewrite_assertion(AssertionMethod::Equals, &four),
            Err(TransformError::UnsupportedConstruct { .. })
        ));
    }
}
