//! Materializes a converted exercise as a directory of files.

use super::{ensure_dir, write_file};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const README_FILE: &str = "README.md";
pub const STUB_FILE: &str = "code.js";
pub const TESTS_FILE: &str = "code.spec.js";
pub const PACKAGE_FILE: &str = "package.json";
pub const CHALLENGE_FILE: &str = "challenge.json";

/// Everything written for one exercise
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub difficulty_slug: String,
    pub title_slug: String,
    pub readme: String,
    pub stub: String,
    pub tests: String,
    pub package_json: String,
    /// The source record, written back verbatim (keys sorted)
    pub challenge: serde_json::Value,
}

impl Exercise {
    /// `difficulty/title`, used in logs and reports
    pub fn id(&self) -> String {
        format!("{}/{}", self.difficulty_slug, self.title_slug)
    }

    pub fn relative_dir(&self) -> PathBuf {
        Path::new(&self.difficulty_slug).join(&self.title_slug)
    }
}

/// Writes exercises under a root directory
#[derive(Debug, Clone)]
pub struct ExerciseWriter {
    root: PathBuf,
}

impl ExerciseWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create `<root>/<difficulty>/<title>/` and write all five files.
    ///
    /// On failure the exercise directory is removed, so no partial
    /// exercise is left behind.
    pub fn write(&self, exercise: &Exercise) -> Result<PathBuf> {
        let dir = self.root.join(exercise.relative_dir());
        let challenge = serde_json::to_string_pretty(&exercise.challenge)
            .with_context(|| format!("Failed to serialize record for {}", exercise.id()))?;

        if let Err(e) = write_files(&dir, exercise, &challenge) {
            if dir.exists() {
                if let Err(cleanup) = fs::remove_dir_all(&dir) {
                    tracing::warn!("Failed to remove {}: {}", dir.display(), cleanup);
                }
            }
            return Err(e);
        }

        tracing::debug!("Wrote {} to {}", exercise.id(), dir.display());
        Ok(dir)
    }
}

fn write_files(dir: &Path, exercise: &Exercise, challenge: &str) -> Result<()> {
    ensure_dir(dir)?;
    write_file(&dir.join(README_FILE), &exercise.readme)?;
    write_file(&dir.join(STUB_FILE), &exercise.stub)?;
    write_file(&dir.join(TESTS_FILE), &exercise.tests)?;
    write_file(&dir.join(PACKAGE_FILE), &exercise.package_json)?;
    write_file(&dir.join(CHALLENGE_FILE), challenge)
}
