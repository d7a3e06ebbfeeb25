pub mod ast;
pub mod errors;

pub use errors::{Result, TransformError};

/// Name and parameter list recovered from a reference solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub parameters: Vec<String>,
}

/// One rewritten assertion statement, e.g. `expect(f(1)).toEqual(2);`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assertion {
    pub code: String,
    /// Serialized test name (a quoted string literal) when the original
    /// assertion carried one
    pub name: Option<String>,
}

impl Assertion {
    pub fn new(code: String, name: Option<String>) -> Self {
        Self { code, name }
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

/// A converted test file, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSuite {
    pub expected_function_name: String,
    pub named_assertions: Vec<Assertion>,
    pub unnamed_assertions: Vec<String>,
}

impl TestSuite {
    pub fn assertion_count(&self) -> usize {
        self.named_assertions.len() + self.unnamed_assertions.len()
    }
}
