//! Configuration validation
//!
//! This module provides validation logic for settings files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use crate::routing::{SHOW_ALL_FLAGS, VERSION_FLAGS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted help alias spellings: `-H`, `--hilfe`, `aide`
static HELP_ALIAS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-{1,2}[A-Za-z?][A-Za-z0-9-]*|[a-z]+)$").expect("help alias pattern is valid")
});

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.name.trim().is_empty() || config.name.contains(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!(
            "Program name '{}' must be a single word",
            config.name
        )));
    }

    for alias in &config.help_aliases {
        validate_help_alias(alias)?;
    }

    Ok(())
}

/// Validate one help alias
fn validate_help_alias(alias: &str) -> ConfigResult<()> {
    if !HELP_ALIAS_RE.is_match(alias) {
        return Err(ConfigError::InvalidHelpAlias(alias.to_string()));
    }

    // A help alias must not shadow another structural flag
    if VERSION_FLAGS.contains(&alias) || SHOW_ALL_FLAGS.contains(&alias) {
        return Err(ConfigError::ConflictingFlag(alias.to_string()));
    }

    Ok(())
}
