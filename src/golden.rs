//! Golden data: recorded (original, transformed) pairs for regression
//! checks of the transforms.

use crate::core::TransformError;
use crate::transformers::{stub_from_solution, suite_from_tests};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenRecord {
    pub original_code: String,
    pub new_code: String,
    pub original_tests: String,
    pub new_tests: String,
}

pub fn write_goldens(path: &Path, goldens: &[GoldenRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(goldens).context("Failed to serialize golden data")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write golden file {}", path.display()))
}

pub fn read_goldens(path: &Path) -> Result<Vec<GoldenRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read golden file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse golden file {}", path.display()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Stub,
    Tests,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Stub => write!(f, "stub"),
            Artifact::Tests => write!(f, "tests"),
        }
    }
}

/// A golden whose recorded output no longer matches the transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenMismatch {
    pub index: usize,
    pub artifact: Artifact,
    pub expected: String,
    pub actual: std::result::Result<String, TransformError>,
}

impl fmt::Display for GoldenMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual {
            Ok(actual) => write!(
                f,
                "golden #{} {}: expected\n{}\ngot\n{}",
                self.index, self.artifact, self.expected, actual
            ),
            Err(e) => write!(f, "golden #{} {}: transform failed: {}", self.index, self.artifact, e),
        }
    }
}

/// Re-run both transforms on every golden and collect the differences
pub fn verify_goldens(goldens: &[GoldenRecord]) -> Vec<GoldenMismatch> {
    goldens
        .par_iter()
        .enumerate()
        .flat_map_iter(|(index, golden)| {
            let stub = check(index, Artifact::Stub, &golden.new_code, || {
                stub_from_solution(&golden.original_code)
            });
            let tests = check(index, Artifact::Tests, &golden.new_tests, || {
                suite_from_tests(&golden.original_tests)
            });
            stub.into_iter().chain(tests)
        })
        .collect()
}

fn check(
    index: usize,
    artifact: Artifact,
    expected: &str,
    transform: impl FnOnce() -> std::result::Result<String, TransformError>,
) -> Option<GoldenMismatch> {
    let actual = transform();
    if matches!(&actual, Ok(output) if output == expected) {
        return None;
    }
    Some(GoldenMismatch {
        index,
        artifact,
        expected: expected.to_string(),
        actual,
    })
}
