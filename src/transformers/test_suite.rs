//! Converts a whole `Test.assertX` test file into a Jest suite.

use super::assertion::{rewrite_assertion, AssertionMethod, RewrittenAssertion};
use crate::core::ast::{Expression, Statement};
use crate::core::{Assertion, Result, TestSuite, TransformError};
use crate::parser::parse_program;

/// Parse a test file and rewrite every `Test.<method>(...)` statement.
///
/// Files that declare variables or helper functions are rejected outright;
/// expression statements that are not `Test` calls are dropped.
pub fn transform_tests(source: &str) -> Result<TestSuite> {
    let program = parse_program(source)?;
    program.body.iter().try_for_each(reject_declaration)?;

    let mut builder = SuiteBuilder::default();
    for statement in &program.body {
        match statement {
            Statement::Empty => {}
            Statement::Expression(expression) => {
                if let Some((method, arguments)) = as_test_call(expression)? {
                    builder.push(rewrite_assertion(method, arguments)?)?;
                }
            }
            Statement::VariableDeclaration { .. } | Statement::FunctionDeclaration { .. } => {
                reject_declaration(statement)?
            }
            Statement::Other { kind } => return Err(TransformError::unknown(kind.as_str())),
        }
    }

    builder.finish()
}

/// Tests may not carry local state or helpers
fn reject_declaration(statement: &Statement) -> Result<()> {
    match statement {
        Statement::VariableDeclaration { .. } => {
            Err(TransformError::parse("tests declare local state"))
        }
        Statement::FunctionDeclaration { name, .. } => Err(TransformError::parse(format!(
            "tests embed helper function `{name}`"
        ))),
        _ => Ok(()),
    }
}

/// Match `Test.<method>(args)`, returning `None` for any other expression
fn as_test_call(expression: &Expression) -> Result<Option<(AssertionMethod, &[Expression])>> {
    let Expression::Call { callee, arguments } = expression else {
        return Ok(None);
    };
    let Expression::Member { object, property } = callee.as_ref() else {
        return Ok(None);
    };
    if !matches!(object.as_ref(), Expression::Identifier(name) if name == "Test") {
        return Ok(None);
    }

    let method = AssertionMethod::from_name(property)?;
    Ok(Some((method, arguments.as_slice())))
}

#[derive(Default)]
struct SuiteBuilder {
    expected_function: Option<String>,
    named: Vec<Assertion>,
    unnamed: Vec<String>,
}

impl SuiteBuilder {
    fn push(&mut self, rewritten: RewrittenAssertion) -> Result<()> {
        if let Some(function) = rewritten.function_under_test {
            self.record_function(function)?;
        }

        let assertion = rewritten.assertion;
        if assertion.is_named() {
            self.named.push(assertion);
        } else {
            self.unnamed.push(assertion.code);
        }
        Ok(())
    }

    fn record_function(&mut self, function: String) -> Result<()> {
        match &self.expected_function {
            Some(existing) if *existing != function => Err(TransformError::InconsistentFunction {
                first: existing.clone(),
                second: function,
            }),
            Some(_) => Ok(()),
            None => {
                self.expected_function = Some(function);
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<TestSuite> {
        if self.named.is_empty() && self.unnamed.is_empty() {
            return Err(TransformError::NoTests);
        }
        let expected_function_name = self.expected_function.ok_or_else(|| {
            TransformError::parse("no assertion calls the function under test")
        })?;

        Ok(TestSuite {
            expected_function_name,
            named_assertions: self.named,
            unnamed_assertions: self.unnamed,
        })
    }
}

impl TestSuite {
    /// Render the suite as a Jest spec file requiring `./code`.
    pub fn render(&self) -> String {
        let named = self
            .named_assertions
            .iter()
            .filter_map(|assertion| {
                assertion
                    .name
                    .as_deref()
                    .map(|name| render_named_test(name, &assertion.code))
            })
            .collect::<Vec<_>>()
            .join("\n\n    ");
        let separator = if named.is_empty() { "" } else { "    \n" };
        let unnamed = self.unnamed_assertions.join("\n        ");

        format!(
            "const {function} = require('./code');\n\
             \n\
             describe('Tests', () => {{\n    \
             {named}\n\
             {separator}    \
             test('the tests', () => {{\n        \
             {unnamed}\n    \
             }});\n\
             }});\n",
            function = self.expected_function_name,
        )
    }
}

fn render_named_test(name: &str, code: &str) -> String {
    format!("test({name}, () => {{\n        {code}\n    }});")
}
