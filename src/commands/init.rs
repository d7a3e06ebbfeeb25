use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# kata-forge Configuration

[package]
name_prefix = "edabit-javascript"
description = "Edabit exercises in Javascript."
repository_url = "https://github.com/nikclayton/edabit-javascript-challenges.git"

[pipeline]
json_dir = "apify_storage/datasets/default"
exercise_dir = "../edabit-javascript-challenges"
parallel = true
# 0 = use all cores
jobs = 0
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, KataForgeConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, KataForgeConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        init_config_in(temp.path(), false).unwrap();
        assert!(init_config_in(temp.path(), false).is_err());
        assert!(init_config_in(temp.path(), true).is_ok());
    }
}
