use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::KataForgeConfig;

pub const CONFIG_FILE_NAME: &str = ".kata-forge.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<KataForgeConfig, String> {
    let config = toml::from_str::<KataForgeConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if config.package.name_prefix.trim().is_empty() {
        return Err("package.name_prefix must not be empty".to_string());
    }

    Ok(config)
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<KataForgeConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> KataForgeConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            KataForgeConfig::default()
        })
}

pub fn load_config() -> KataForgeConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            KataForgeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = parse_and_validate_config(
            r#"
            [package]
            name_prefix = "katas"

            [pipeline]
            jobs = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.package.name_prefix, "katas");
        assert_eq!(
            config.package.description,
            "Edabit exercises in Javascript."
        );
        assert_eq!(config.pipeline.jobs, 4);
        assert!(config.pipeline.parallel);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = parse_and_validate_config("[package]\nname_prefix = \"  \"\n").unwrap_err();
        assert!(err.contains("name_prefix"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(parse_and_validate_config("[package\n").is_err());
    }

    #[test]
    fn test_directory_ancestors_depth() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(ancestors, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_load_config_from_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[pipeline]\nparallel = false\n",
        )
        .unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();

        let config = load_config_from(nested);
        assert!(!config.pipeline.parallel);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config_from(temp.path().to_path_buf());
        assert_eq!(config, KataForgeConfig::default());
    }
}
