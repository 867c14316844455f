//! Built-in command groups
//!
//! Every group declares itself through a plain function returning its
//! [`GroupSpec`]. [`GROUPS`] is the full registration list.

pub mod completions;
pub mod root;
pub mod sub;

use crate::error::RegistryResult;
use crate::registry::{GroupSpec, Registry};

/// Registration list, read once at startup
pub static GROUPS: &[fn() -> GroupSpec] = &[root::group, sub::group, completions::group];

/// Group identities whose namespace does not follow from the identity
pub static ALIASES: &[(&str, &str)] = &[(completions::IDENTITY, "completions")];

/// Build the registry from the built-in groups
pub fn registry() -> RegistryResult<Registry> {
    let builder = ALIASES
        .iter()
        .fold(Registry::builder(), |builder, (identity, namespace)| {
            builder.alias(*identity, *namespace)
        });

    GROUPS
        .iter()
        .fold(builder, |builder, register| builder.group(register()))
        .build()
}
