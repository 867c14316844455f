//! Main CLI application

use crate::cli::Dispatcher;
use crate::commands;
use crate::config::{load_config, validate_config, Config};
use crate::error::NscliError;
use crate::logging;
use crate::registry::Registry;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// CLI application
pub struct App {
    /// Loaded settings
    config: Config,
    /// Settings file the config came from, if any
    config_path: Option<PathBuf>,
    /// Registered command groups
    registry: Registry,
}

impl App {
    /// Create a new app from the discovered settings file
    pub fn new() -> Result<Self, NscliError> {
        let (config, config_path) = load_config()?;
        let mut app = Self::with_config(config)?;
        app.config_path = config_path;
        Ok(app)
    }

    /// Create an app with explicit settings and the built-in command groups
    pub fn with_config(config: Config) -> Result<Self, NscliError> {
        validate_config(&config)?;
        let registry = commands::registry()?;

        Ok(App {
            config,
            config_path: None,
            registry,
        })
    }

    /// Create an app around an already built registry
    pub fn with_registry(config: Config, registry: Registry) -> Result<Self, NscliError> {
        validate_config(&config)?;

        Ok(App {
            config,
            config_path: None,
            registry,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the application with the given arguments (program name excluded)
    pub fn run(&self, args: &[String], out: &mut dyn Write) -> Result<(), NscliError> {
        if let Some(path) = &self.config_path {
            debug!(path = %path.display(), "using settings file");
        }

        Dispatcher::new(&self.registry, &self.config).run(args, out)
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), NscliError> {
    // A .env file may carry NSCLI_LOG and NSCLI_CONFIG
    dotenvy::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let app = App::new()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_app(app: &App, tokens: &[&str]) -> String {
        let args: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        app.run(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_app_with_default_config() {
        let app = App::with_config(Config::default()).unwrap();
        assert!(app.registry().contains("sub:goodbye"));
        assert_eq!(app.config().name, "nscli");
    }

    #[test]
    fn test_app_rejects_invalid_config() {
        let config = Config {
            help_aliases: vec!["--version".to_string()],
            ..Config::default()
        };
        assert!(App::with_config(config).is_err());
    }

    #[test]
    fn test_app_runs_builtin_commands() {
        let app = App::with_config(Config::default()).unwrap();
        assert_eq!(run_app(&app, &["hello", "World"]), "Hello World\n");
        assert_eq!(run_app(&app, &["sub:good", "Alice"]), "Goodbye Alice\n");
    }

    #[test]
    fn test_app_custom_program_name() {
        let config = Config {
            name: "ufo".to_string(),
            ..Config::default()
        };
        let app = App::with_config(config).unwrap();
        let out = run_app(&app, &[]);
        assert!(out.contains("ufo sub:goodbye NAME"));
    }
}
