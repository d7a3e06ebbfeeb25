//! Shared error types for the exercise transforms

use thiserror::Error;

/// Failure of a single transform.
///
/// `Parse`, `UnsupportedConstruct`, `UnknownConstruct` and
/// `InconsistentFunction` are ordinary per-exercise rejections: the exercise
/// is skipped and the run continues. `UnknownAssertionMethod` and `NoTests`
/// mean an assumption about the dataset no longer holds; see
/// [`TransformError::is_logic_error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Source did not parse, or its outer shape is outside the accepted subset
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// A recognised node that cannot be written back as source
    #[error("Unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },

    /// A node kind outside the restricted subset
    #[error("Unknown construct: `{kind}`")]
    UnknownConstruct { kind: String },

    /// Assertions in one file exercise different functions
    #[error("Assertions call different functions: `{first}` and `{second}`")]
    InconsistentFunction { first: String, second: String },

    #[error("Unknown Test method called, Test.{0}")]
    UnknownAssertionMethod(String),

    #[error("No tests created, test conversion is broken")]
    NoTests,
}

impl TransformError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn unsupported(construct: impl Into<String>) -> Self {
        Self::UnsupportedConstruct {
            construct: construct.into(),
        }
    }

    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::UnknownConstruct { kind: kind.into() }
    }

    /// True when the error signals a broken pipeline rather than an
    /// exercise that simply falls outside the supported subset.
    pub fn is_logic_error(&self) -> bool {
        matches!(self, Self::UnknownAssertionMethod(_) | Self::NoTests)
    }
}

/// Result type alias using the transform error
pub type Result<T> = std::result::Result<T, TransformError>;
