//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, NscliError};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["nscli.yml", "nscli.yaml"];

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV: &str = "NSCLI_CONFIG";

/// Find a settings file by searching the current directory and its parents
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = env::current_dir().ok()?;
    find_config_file_from(current_dir)
}

/// Find a settings file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Settings file in the per-user config directory, if one exists
pub fn user_config_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "nscli")?;
    let path = dirs.config_dir().join("config.yml");
    path.is_file().then_some(path)
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, NscliError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, NscliError> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load settings from the first place that has them
///
/// `NSCLI_CONFIG` wins and must exist. Otherwise the nearest `nscli.yml`
/// upwards from the current directory, then the user config directory,
/// then built-in defaults.
pub fn load_config() -> Result<(Config, Option<PathBuf>), NscliError> {
    let path = match env::var_os(CONFIG_ENV) {
        Some(explicit) => {
            let path = PathBuf::from(explicit);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            Some(path)
        }
        None => find_config_file().or_else(user_config_file),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading settings");
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple_config() {
        let yaml = r#"
name: ufo
help-aliases: ["-H"]
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.name, "ufo");
        assert_eq!(config.help_aliases, vec!["-H".to_string()]);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_config("help-aliases: {");
        assert!(matches!(result, Err(NscliError::Yaml(_))));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nscli.yml");
        fs::write(&config_path, "name: test\n").unwrap();

        let found = find_config_file_from(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nscli.yaml");
        let sub_dir = temp_dir.path().join("subdir");

        fs::create_dir(&sub_dir).unwrap();
        fs::write(&config_path, "name: test\n").unwrap();

        let found = find_config_file_from(sub_dir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_parse_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nscli.yml");
        fs::write(&config_path, "usage: Custom usage\n").unwrap();

        let config = parse_config_file(&config_path).unwrap();
        assert_eq!(config.usage.as_deref(), Some("Custom usage"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = parse_config_file(&temp_dir.path().join("nope.yml"));
        assert!(matches!(
            result,
            Err(NscliError::Config(ConfigError::Invalid(_)))
        ));
    }
}
