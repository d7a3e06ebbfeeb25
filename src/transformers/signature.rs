//! Recovers the solution's function signature and renders the empty stub.

use crate::core::ast::{Expression, Pattern, Statement, VariableDeclarator};
use crate::core::{FunctionSignature, Result, TransformError};
use crate::parser::parse_program;

/// Extract `{name, parameters}` from the first statement of a solution.
///
/// Accepts `function name(a, b) { ... }` and
/// `var name = function(a, b) { ... }` (arrow functions included). The
/// function body never influences the result.
pub fn extract_signature(source: &str) -> Result<FunctionSignature> {
    let program = parse_program(source)?;

    let (name, params) = match program.body.first() {
        Some(Statement::FunctionDeclaration { name, params }) => (name, params),
        Some(Statement::VariableDeclaration { declarations }) => match declarations.first() {
            Some(VariableDeclarator {
                id: Pattern::Identifier(name),
                init: Some(Expression::Function { params }),
            }) => (name, params),
            _ => {
                return Err(TransformError::parse(
                    "variable declaration does not bind a function expression",
                ))
            }
        },
        Some(_) | None => return Err(TransformError::parse("could not parse function name")),
    };

    if name.is_empty() {
        return Err(TransformError::parse("could not parse function name"));
    }

    let parameters = params
        .iter()
        .map(|param| match param {
            Pattern::Identifier(name) => Ok(name.clone()),
            Pattern::Other { kind } => Err(TransformError::parse(format!(
                "unsupported parameter `{kind}`"
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FunctionSignature {
        name: name.clone(),
        parameters,
    })
}

impl FunctionSignature {
    /// Empty function with the same name and parameters, exported as the
    /// module's value.
    pub fn render_stub(&self) -> String {
        format!(
            "function {name}({params}) {{\n  // Your code here.\n}}\n\nmodule.exports = {name};\n",
            name = self.name,
            params = self.parameters.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_function_declaration() {
        let signature = extract_signature("function hello(a, b) { return a + b; }").unwrap();
        assert_eq!(
            signature,
            FunctionSignature {
                name: "hello".into(),
                parameters: vec!["a".into(), "b".into()],
            }
        );
        assert_eq!(
            signature.render_stub(),
            "function hello(a, b) {\n  // Your code here.\n}\n\nmodule.exports = hello;\n"
        );
    }

    #[test]
    fn test_body_does_not_matter() {
        let plain = extract_signature("function hello(a, b) { return a + b; }").unwrap();
        let busy = extract_signature(
            "function hello(a, b) { const c = [a, b].map(x => x * 2); return c; }",
        )
        .unwrap();
        assert_eq!(plain, busy);
    }

    #[test]
    fn test_variable_bound_function_expression() {
        let signature =
            extract_signature("var recursiveSum = function(n) { return n; };").unwrap();
        assert_eq!(signature.name, "recursiveSum");
        assert_eq!(signature.parameters, vec!["n".to_string()]);

        let arrow = extract_signature("const add = (a, b) => a + b;").unwrap();
        assert_eq!(arrow.render_stub().lines().next(), Some("function add(a, b) {"));
    }

    #[test]
    fn test_rejected_shapes() {
        assert!(matches!(
            extract_signature("class Foo { bar() {} }"),
            Err(TransformError::Parse { .. })
        ));
        assert!(matches!(
            extract_signature("const answer = 42;"),
            Err(TransformError::Parse { .. })
        ));
        assert!(matches!(
            extract_signature(""),
            Err(TransformError::Parse { .. })
        ));
        assert!(matches!(
            extract_signature("function broken( {"),
            Err(TransformError::Parse { .. })
        ));
        assert!(matches!(
            extract_signature("function f({a, b}) {}"),
            Err(TransformError::Parse { .. })
        ));
    }

    #[test]
    fn test_no_parameters() {
        let signature = extract_signature("function answer() { return 42; }").unwrap();
        assert_eq!(
            signature.render_stub(),
            "function answer() {\n  // Your code here.\n}\n\nmodule.exports = answer;\n"
        );
    }
}
