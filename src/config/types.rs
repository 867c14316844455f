//! Core configuration types
//!
//! This module defines the data structures that represent an nscli.yml settings file.

use serde::{Deserialize, Serialize};

/// Default program name used in banners and usage lines
pub const DEFAULT_PROGRAM: &str = "nscli";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Program name shown in help listings and operation usage
    pub name: String,

    /// General usage text printed under the command listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Extra tokens that request help, e.g. `-H`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub help_aliases: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: DEFAULT_PROGRAM.to_string(),
            usage: None,
            help_aliases: Vec::new(),
        }
    }
}
