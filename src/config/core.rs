use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_name_prefix() -> String {
    "edabit-javascript".to_string()
}

fn default_description() -> String {
    "Edabit exercises in Javascript.".to_string()
}

fn default_repository_url() -> String {
    "https://github.com/nikclayton/edabit-javascript-challenges.git".to_string()
}

fn default_json_dir() -> PathBuf {
    PathBuf::from("apify_storage/datasets/default")
}

fn default_exercise_dir() -> PathBuf {
    PathBuf::from("../edabit-javascript-challenges")
}

fn default_parallel() -> bool {
    true
}

/// Root configuration structure, read from `.kata-forge.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KataForgeConfig {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Values substituted into each exercise's `package.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageConfig {
    /// Package names are `<name_prefix>-<title slug>`
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_repository_url")]
    pub repository_url: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name_prefix: default_name_prefix(),
            description: default_description(),
            repository_url: default_repository_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Directory holding the dataset's `*.json` records
    #[serde(default = "default_json_dir")]
    pub json_dir: PathBuf,

    /// Root directory exercises are written under
    #[serde(default = "default_exercise_dir")]
    pub exercise_dir: PathBuf,

    /// Process exercises concurrently (default: true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker threads; 0 uses every available core
    #[serde(default)]
    pub jobs: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            json_dir: default_json_dir(),
            exercise_dir: default_exercise_dir(),
            parallel: default_parallel(),
            jobs: 0,
        }
    }
}
