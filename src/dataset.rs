//! Loading of scraped challenge records.
//!
//! The dataset is a directory of JSON files, one record per file, as
//! written by the scraper's dataset storage.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One solved challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    pub difficulty: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Instructions as HTML
    #[serde(default)]
    pub instructions: String,
    /// Reference solution source
    pub code: String,
    /// `Test.assertX` test source
    pub tests: String,
}

/// A record together with where it came from and its untouched JSON
#[derive(Debug, Clone)]
pub struct DatasetEntry {
    pub path: PathBuf,
    pub record: ChallengeRecord,
    pub raw: serde_json::Value,
}

/// A dataset file that could not be read or decoded
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// All `*.json` files directly inside `dir`, sorted by path. `dir` must
/// be an existing directory.
pub fn find_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Dataset directory {} does not exist", dir.display());
    }

    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.json");
    let pattern = pattern.to_string_lossy();

    let mut files = glob::glob(&pattern)
        .with_context(|| format!("Invalid dataset path {}", dir.display()))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable dataset entry: {}", e);
                None
            }
        })
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

pub fn load_record(path: &Path) -> Result<DatasetEntry> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    let record = ChallengeRecord::deserialize(&raw)
        .with_context(|| format!("{} is not a challenge record", path.display()))?;

    Ok(DatasetEntry {
        path: path.to_path_buf(),
        record,
        raw,
    })
}

/// Load every record in `dir`; undecodable files are returned separately
/// rather than failing the whole load.
pub fn load_records(dir: &Path) -> Result<(Vec<DatasetEntry>, Vec<LoadFailure>)> {
    let mut entries = Vec::new();
    let mut failures = Vec::new();

    for path in find_record_files(dir)? {
        match load_record(&path) {
            Ok(entry) => entries.push(entry),
            Err(error) => failures.push(LoadFailure { path, error }),
        }
    }

    tracing::debug!(
        loaded = entries.len(),
        failed = failures.len(),
        "Loaded dataset from {}",
        dir.display()
    );
    Ok((entries, failures))
}
