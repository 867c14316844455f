//! Namespace resolution and command abbreviation
//!
//! A typed command such as `sub:good` is split into a namespace and an
//! operation prefix. The prefix is expanded only when it names exactly one
//! operation of that group; anything else comes back exactly as typed.

use crate::registry::{full_command_name, Registry};
use tracing::debug;

/// Outcome of resolving a typed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing was typed
    Empty,
    /// The input already is a FullCommandName
    Exact(String),
    /// A unique prefix was expanded to this FullCommandName
    Expanded(String),
    /// The namespace does not name a group
    UnknownNamespace,
    /// The prefix matches several operations
    Ambiguous(Vec<String>),
    /// The namespace is known but no operation starts with the prefix
    NoMatch,
}

impl Resolution {
    /// The resolved FullCommandName, if any
    pub fn command(&self) -> Option<&str> {
        match self {
            Resolution::Exact(name) | Resolution::Expanded(name) => Some(name),
            _ => None,
        }
    }
}

/// Resolves typed, possibly abbreviated commands against a registry
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Resolver { registry }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Canonical FullCommandName for `raw`, or `raw` unchanged when it cannot
    /// be resolved unambiguously
    pub fn resolve(&self, raw: &str) -> String {
        match self.classify(raw) {
            Resolution::Exact(name) | Resolution::Expanded(name) => name,
            _ => raw.to_string(),
        }
    }

    /// Resolve `raw` and report why resolution stopped
    pub fn classify(&self, raw: &str) -> Resolution {
        if raw.is_empty() {
            return Resolution::Empty;
        }

        let (namespace, prefix) = match raw.rsplit_once(':') {
            Some((namespace, prefix)) => {
                // The root group is only reachable through bare names
                if namespace.is_empty() || namespace.split(':').any(str::is_empty) {
                    debug!(command = raw, "empty namespace segment");
                    return Resolution::UnknownNamespace;
                }
                (namespace, prefix)
            }
            None => ("", raw),
        };

        if prefix.is_empty() {
            return Resolution::NoMatch;
        }

        let Some(group) = self.registry.lookup_group(namespace) else {
            debug!(command = raw, namespace, "unknown namespace");
            return Resolution::UnknownNamespace;
        };

        if group.lookup(prefix).is_some() {
            return Resolution::Exact(full_command_name(namespace, prefix));
        }

        let candidates: Vec<&str> = group
            .operation_names()
            .filter(|name| name.starts_with(prefix))
            .collect();

        match candidates.as_slice() {
            [] => {
                debug!(command = raw, "no operation matches");
                Resolution::NoMatch
            }
            [only] => {
                let name = full_command_name(namespace, only);
                debug!(command = raw, expanded = %name, "expanded abbreviation");
                Resolution::Expanded(name)
            }
            many => {
                debug!(command = raw, candidates = ?many, "ambiguous abbreviation");
                Resolution::Ambiguous(
                    many.iter()
                        .map(|name| full_command_name(namespace, name))
                        .collect(),
                )
            }
        }
    }
}

/// Namespace part of a command: `sub:goodbye` gives `Some("sub")`
pub fn namespace_of(command: &str) -> Option<&str> {
    command.rsplit_once(':').map(|(namespace, _)| namespace)
}

/// Trailing operation part of a command: `sub:goodbye` gives `goodbye`
pub fn operation_of(command: &str) -> &str {
    command.rsplit(':').next().unwrap_or(command)
}
