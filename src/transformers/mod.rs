//! Source-to-source transforms from a solved challenge to an exercise.

pub mod assertion;
pub mod expression;
pub mod signature;
pub mod test_suite;

pub use assertion::{rewrite_assertion, AssertionMethod, RewrittenAssertion};
pub use expression::serialize;
pub use signature::extract_signature;
pub use test_suite::transform_tests;

use crate::core::Result;

/// Reference solution source to the learner's empty stub
pub fn stub_from_solution(source: &str) -> Result<String> {
    extract_signature(source).map(|signature| signature.render_stub())
}

/// `Test.assertX` test source to a rendered Jest suite
pub fn suite_from_tests(source: &str) -> Result<String> {
    transform_tests(source).map(|suite| suite.render())
}
