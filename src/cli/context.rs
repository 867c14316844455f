//! Handler execution context
//!
//! A handler sees the registry it was resolved from, the loaded settings,
//! an output sink and its parsed invocation.

use crate::config::Config;
use crate::registry::Registry;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use thiserror::Error;

/// State shared with an operation handler for one invocation
pub struct Context<'a> {
    /// Registry the operation was resolved from
    pub registry: &'a Registry,

    /// Loaded settings
    pub config: &'a Config,

    out: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub fn new(registry: &'a Registry, config: &'a Config, out: &'a mut dyn Write) -> Self {
        Context {
            registry,
            config,
            out,
        }
    }

    /// Standard output for the handler
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Program name used in banners
    pub fn program(&self) -> &str {
        &self.config.name
    }
}

/// Parsed arguments for a resolved operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// FullCommandName of the operation
    pub command: String,

    /// Values per positional parameter
    pub params: BTreeMap<String, Vec<String>>,

    /// Option flags that were set
    pub flags: BTreeSet<String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>) -> Self {
        Invocation {
            command: command.into(),
            ..Default::default()
        }
    }

    /// First value of a parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a parameter, empty when absent
    pub fn values(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

/// Error a handler returns to pick its own process exit code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("exited with status {0}")]
pub struct Exit(pub i32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_accessors() {
        let mut inv = Invocation::new("sub:goodbye");
        inv.params
            .insert("name".to_string(), vec!["Alice".to_string()]);
        inv.flags.insert("noop".to_string());

        assert_eq!(inv.param("name"), Some("Alice"));
        assert_eq!(inv.param("missing"), None);
        assert_eq!(inv.values("name"), &["Alice".to_string()]);
        assert!(inv.values("missing").is_empty());
        assert!(inv.flag("noop"));
        assert!(!inv.flag("verbose"));
    }
}
