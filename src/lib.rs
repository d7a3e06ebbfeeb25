// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dataset;
pub mod golden;
pub mod io;
pub mod markdown;
pub mod parser;
pub mod pipeline;
pub mod progress;
pub mod transformers;

// Re-export commonly used types
pub use crate::core::{Assertion, FunctionSignature, Result, TestSuite, TransformError};

pub use crate::transformers::{
    extract_signature, rewrite_assertion, serialize, stub_from_solution, suite_from_tests,
    transform_tests, AssertionMethod, RewrittenAssertion,
};

pub use crate::parser::parse_program;

pub use crate::config::{load_config, KataForgeConfig, PackageConfig, PipelineConfig};

pub use crate::dataset::{load_records, ChallengeRecord, DatasetEntry};

pub use crate::golden::{read_goldens, verify_goldens, write_goldens, GoldenMismatch, GoldenRecord};

pub use crate::io::{render_package_json, slugify, Exercise, ExerciseWriter};

pub use crate::markdown::html_to_markdown;

pub use crate::pipeline::{build_exercise, run_convert, ConvertOptions, ConvertReport};
