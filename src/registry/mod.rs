//! Command registry
//!
//! The registry is assembled once per process from an explicit list of
//! group declarations. Discovery derives each group's namespace, checks
//! that every FullCommandName is unique and that declarations are
//! consistent, and then serves lookups for the rest of the process.

pub mod spec;

pub use spec::*;

use crate::error::{RegistryError, RegistryResult};
use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Allowed spelling for operation, parameter, option and identity segment names
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("name pattern is valid"));

/// Operation name provided by the dispatch layer itself
pub const HELP_OPERATION: &str = "help";

/// Argument id clap gives every operation's own help flag
const HELP_ARGUMENT: &str = "help";

/// All known command groups, keyed by namespace
pub struct Registry {
    groups: BTreeMap<String, GroupSpec>,
    full_names: OnceCell<Vec<String>>,
}

/// Collects group declarations and the alias table before discovery
#[derive(Default)]
pub struct RegistryBuilder {
    groups: Vec<GroupSpec>,
    aliases: HashMap<String, String>,
}

impl RegistryBuilder {
    /// Register a command group
    pub fn group(mut self, group: GroupSpec) -> Self {
        self.groups.push(group);
        self
    }

    /// Map a group identity to a namespace that does not follow from its name
    pub fn alias(mut self, identity: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.aliases.insert(identity.into(), namespace.into());
        self
    }

    /// Run discovery and produce the registry
    pub fn build(self) -> RegistryResult<Registry> {
        let mut groups = BTreeMap::new();
        let mut seen = HashSet::new();

        for namespace in self.aliases.values() {
            validate_namespace(namespace)?;
        }

        for mut group in self.groups {
            validate_identity(&group.identity)?;
            let namespace = derive_namespace(&group.identity, &self.aliases);

            if groups.contains_key(&namespace) {
                return Err(RegistryError::DuplicateGroup(namespace));
            }

            for option in &group.shared_options {
                validate_argument(&group.identity, option)?;
            }

            for op in group.operations_mut() {
                op.group = namespace.clone();
            }

            for op in group.operations() {
                validate_operation(&group, op)?;
                let full_name = op.full_name();
                if !seen.insert(full_name.clone()) {
                    return Err(RegistryError::DuplicateCommand(full_name));
                }
            }

            debug!(
                identity = %group.identity,
                namespace = %namespace,
                operations = group.operations().len(),
                "registered command group"
            );

            group.namespace = namespace.clone();
            groups.insert(namespace, group);
        }

        Ok(Registry {
            groups,
            full_names: OnceCell::new(),
        })
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Every discovered group, ordered by namespace
    pub fn discover_all(&self) -> impl Iterator<Item = &GroupSpec> {
        self.groups.values()
    }

    /// Every FullCommandName, sorted
    pub fn full_names(&self) -> &[String] {
        self.full_names.get_or_init(|| {
            let mut names: Vec<String> = self
                .groups
                .values()
                .flat_map(|g| g.operations().iter().map(OperationSpec::full_name))
                .collect();
            names.sort();
            names
        })
    }

    /// Find a group by namespace (empty string for the root group)
    pub fn lookup_group(&self, namespace: &str) -> Option<&GroupSpec> {
        self.groups.get(namespace)
    }

    /// Find an operation by namespace and exact name
    pub fn lookup_operation(&self, namespace: &str, name: &str) -> Option<&OperationSpec> {
        self.lookup_group(namespace)?.lookup(name)
    }

    /// Find the group and operation behind an exact FullCommandName
    pub fn lookup(&self, full_name: &str) -> Option<(&GroupSpec, &OperationSpec)> {
        let (namespace, name) = split_full_name(full_name);
        let group = self.lookup_group(namespace)?;
        let op = group.lookup(name)?;
        Some((group, op))
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.lookup(full_name).is_some()
    }
}

/// Split a FullCommandName on its last colon into namespace and operation
pub fn split_full_name(full_name: &str) -> (&str, &str) {
    match full_name.rsplit_once(':') {
        Some((namespace, name)) => (namespace, name),
        None => ("", full_name),
    }
}

/// Namespace for a group identity
///
/// The alias table wins, the root identity maps to the empty namespace and
/// every other identity has its path separators replaced by colons.
fn derive_namespace(identity: &str, aliases: &HashMap<String, String>) -> String {
    if let Some(namespace) = aliases.get(identity) {
        return namespace.clone();
    }
    if identity == ROOT_IDENTITY {
        return String::new();
    }
    identity.replace('/', ":")
}

fn validate_name(name: &str) -> RegistryResult<()> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(RegistryError::InvalidName(name.to_string()))
    }
}

/// Alias targets must be non-empty, colon-separated names
fn validate_namespace(namespace: &str) -> RegistryResult<()> {
    if namespace.split(':').all(|segment| NAME_RE.is_match(segment)) {
        Ok(())
    } else {
        Err(RegistryError::InvalidName(namespace.to_string()))
    }
}

/// Parameter and option names, which become clap argument ids
fn validate_argument(owner: &str, name: &str) -> RegistryResult<()> {
    validate_name(name)?;
    if name == HELP_ARGUMENT {
        return Err(RegistryError::ReservedArgument {
            command: owner.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

fn validate_identity(identity: &str) -> RegistryResult<()> {
    for segment in identity.split('/') {
        if !NAME_RE.is_match(segment) {
            return Err(RegistryError::InvalidName(identity.to_string()));
        }
    }
    Ok(())
}

fn validate_operation(group: &GroupSpec, op: &OperationSpec) -> RegistryResult<()> {
    validate_name(&op.name)?;

    if op.name == HELP_OPERATION {
        return Err(RegistryError::ReservedName(op.full_name()));
    }

    if op.arity.boundary() != op.params.len() {
        return Err(RegistryError::ArityMismatch {
            command: op.full_name(),
            arity: op.arity.signed(),
            params: op.params.len(),
        });
    }

    let options = group.options_for(op);
    for param in &op.params {
        validate_argument(&op.full_name(), param)?;
        if options.contains(&param.as_str()) {
            return Err(RegistryError::DuplicateNames {
                command: op.full_name(),
                name: param.clone(),
            });
        }
    }

    for option in &op.options {
        validate_argument(&op.full_name(), option)?;
    }

    Ok(())
}
