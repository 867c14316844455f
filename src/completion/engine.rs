//! Completion engine
//!
//! Given the words already typed after the program name, produce the
//! candidates for the next word. There are three phases:
//!
//! 1. nothing typed yet: every top-level command
//! 2. inside the positional region: the name of the next parameter, as a hint
//! 3. past the positional region: the option flags not used so far
//!
//! The positional region is `|arity|` words long, counting the command
//! word itself, so `scale(service, count)` has arity 2 and
//! `nscli completion scale web` is already in phase 3. Variadic operations
//! are treated the same way; only the count matters.
//!
//! The first word must be an exact FullCommandName. Shell scripts only
//! call in here after the shell itself matched the top-level word.

use crate::registry::{flag_spelling, GroupSpec, OperationSpec, Registry, HELP_OPERATION};
use tracing::debug;

/// Which kind of candidates a typed word list calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Commands,
    Params,
    Options,
}

/// Produces completion candidates from the registry
pub struct Completer<'a> {
    registry: &'a Registry,
}

impl<'a> Completer<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Completer { registry }
    }

    /// Candidates for the next word after `typed`
    pub fn complete<S: AsRef<str>>(&self, typed: &[S]) -> Vec<String> {
        let Some(first) = typed.first() else {
            return self.all_commands();
        };

        let Some((group, op)) = self.registry.lookup(first.as_ref()) else {
            debug!(command = first.as_ref(), "completion for unknown command");
            return Vec::new();
        };

        match phase(op, typed.len()) {
            Phase::Commands => self.all_commands(),
            Phase::Params => params_completion(op, typed.len()),
            Phase::Options => options_completion(group, op, typed),
        }
    }

    /// Every FullCommandName except the help operation
    pub fn all_commands(&self) -> Vec<String> {
        self.registry
            .full_names()
            .iter()
            .filter(|name| name.rsplit(':').next() != Some(HELP_OPERATION))
            .cloned()
            .collect()
    }
}

/// Phase for `typed_count` words typed for operation `op`
pub fn phase(op: &OperationSpec, typed_count: usize) -> Phase {
    if typed_count == 0 {
        Phase::Commands
    } else if typed_count <= op.arity.boundary() {
        Phase::Params
    } else {
        Phase::Options
    }
}

fn params_completion(op: &OperationSpec, typed_count: usize) -> Vec<String> {
    op.params
        .get(typed_count - 1)
        .map(|param| vec![param.clone()])
        .unwrap_or_default()
}

fn options_completion<S: AsRef<str>>(
    group: &GroupSpec,
    op: &OperationSpec,
    typed: &[S],
) -> Vec<String> {
    group
        .options_for(op)
        .into_iter()
        .map(flag_spelling)
        .filter(|flag| !typed.iter().any(|word| word.as_ref() == flag))
        .collect()
}
