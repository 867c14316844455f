//! Error types for nscli

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nscli operations
pub type Result<T> = std::result::Result<T, NscliError>;

/// Main error type for nscli
#[derive(Error, Debug)]
pub enum NscliError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command registration errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Argument errors reported by clap for a resolved operation
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Errors raised by an operation handler, passed through untouched
    #[error(transparent)]
    Handler(#[from] anyhow::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl NscliError {
    /// Process exit code for this error
    ///
    /// Usage errors keep clap's code and handlers may pick their own through
    /// [`crate::cli::Exit`].
    pub fn exit_code(&self) -> i32 {
        match self {
            NscliError::Usage(e) => e.exit_code(),
            NscliError::Handler(e) => e
                .downcast_ref::<crate::cli::Exit>()
                .map(|exit| exit.0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

/// Settings file discovery and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid help alias '{0}'")]
    InvalidHelpAlias(String),

    #[error("Help alias '{0}' conflicts with a built-in flag")]
    ConflictingFlag(String),
}

/// Errors found while assembling the command registry
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Command '{0}' is registered more than once")]
    DuplicateCommand(String),

    #[error("Namespace '{0}' is claimed by more than one group")]
    DuplicateGroup(String),

    #[error("Command '{command}' declares arity {arity} but {params} parameter(s)")]
    ArityMismatch {
        command: String,
        arity: i32,
        params: usize,
    },

    #[error("Invalid name '{0}'")]
    InvalidName(String),

    #[error("'{0}' is reserved and cannot be registered as an operation")]
    ReservedName(String),

    #[error("'{name}' is reserved for the help flag and cannot be used in '{command}'")]
    ReservedArgument { command: String, name: String },

    #[error("Parameter and option '{name}' must have unique names in '{command}'")]
    DuplicateNames { command: String, name: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
