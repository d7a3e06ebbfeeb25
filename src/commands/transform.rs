use crate::cli::SourceKind;
use crate::io::read_file;
use crate::transformers::{stub_from_solution, suite_from_tests};
use anyhow::{Context, Result};
use std::path::Path;

/// Transform the file at `path` as `kind`
pub fn transform_file(kind: SourceKind, path: &Path) -> Result<String> {
    let source = read_file(path)?;
    let output = match kind {
        SourceKind::Code => stub_from_solution(&source),
        SourceKind::Tests => suite_from_tests(&source),
    };
    output.with_context(|| format!("Failed to transform {}", path.display()))
}

pub fn handle_transform(kind: SourceKind, path: &Path) -> Result<()> {
    print!("{}", transform_file(kind, path)?);
    Ok(())
}
