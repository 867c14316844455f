//! Dispatcher
//!
//! Finds the operation a raw argument list names, normalizes the list and
//! runs the operation's handler. Anything that does not resolve to an
//! operation ends in the top-level help listing (or version output).

use crate::cli::command::{is_display, parse_invocation};
use crate::cli::Context;
use crate::config::Config;
use crate::error::Result;
use crate::registry::{GroupSpec, OperationSpec, Registry, HELP_OPERATION};
use crate::routing::{FlagSet, Normalizer, ParsedInvocation, Resolver};
use colored::Colorize;
use std::io::Write;
use tracing::debug;

/// Routes raw argument lists to registered operations
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    config: &'a Config,
    flags: FlagSet,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry, config: &'a Config) -> Self {
        Dispatcher {
            registry,
            config,
            flags: FlagSet::with_help_aliases(config.help_aliases.iter().cloned()),
        }
    }

    /// Dispatch one invocation, writing any output to `out`
    pub fn run(&self, raw_args: &[String], out: &mut dyn Write) -> Result<()> {
        let normalizer = Normalizer::new(Resolver::new(self.registry), &self.flags);
        let command = normalizer.command(raw_args);

        let target = command
            .as_deref()
            .and_then(|command| self.registry.lookup(command));

        match target {
            Some((group, op)) => {
                let parsed = normalizer.normalize(raw_args);
                debug!(command = %op.full_name(), args = ?parsed.args, "dispatching");
                self.invoke(group, op, &parsed, out)
            }
            None => {
                debug!(command = ?command, "no operation found, showing help");
                self.main_help(raw_args, out)
            }
        }
    }

    fn invoke(
        &self,
        group: &GroupSpec,
        op: &OperationSpec,
        parsed: &ParsedInvocation,
        out: &mut dyn Write,
    ) -> Result<()> {
        // `help <operation>` ignores whatever else was typed
        let args = if parsed.help_requested {
            &parsed.args[..parsed.args.len().min(2)]
        } else {
            &parsed.args[..]
        };

        let invocation = match parse_invocation(&self.config.name, group, args) {
            Ok(invocation) => invocation,
            Err(e) if is_display(&e) => {
                write!(out, "{}", e.render())?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut ctx = Context::new(self.registry, self.config, out);
        (op.handler)(&mut ctx, &invocation)?;
        Ok(())
    }

    /// Version output for a lone version flag, otherwise the command listing
    fn main_help(&self, raw_args: &[String], out: &mut dyn Write) -> Result<()> {
        if let [only] = raw_args {
            if self.flags.is_version(only) {
                writeln!(out, "{}", version_line(&self.config.name))?;
                return Ok(());
            }
        }

        let show_all = raw_args.iter().any(|arg| self.flags.is_show_all(arg));
        let rows = self.help_rows(show_all);
        let width = rows.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);

        writeln!(out, "{}", "Commands:".bold())?;
        for (usage, help) in &rows {
            if help.is_empty() {
                writeln!(out, "  {}", usage)?;
            } else {
                writeln!(out, "  {:<width$}  # {}", usage, help, width = width)?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{}", self.usage_text())?;
        Ok(())
    }

    /// `(usage, description)` rows for the command listing, sorted by command
    pub fn help_rows(&self, show_all: bool) -> Vec<(String, String)> {
        let program = &self.config.name;
        let mut rows: Vec<(String, String, String)> = self
            .registry
            .discover_all()
            .flat_map(|group| group.operations())
            .filter(|op| op.name != HELP_OPERATION && (show_all || !op.hidden))
            .map(|op| {
                let full_name = op.full_name();
                let usage = format!("{} {} {}", program, full_name, op.params_usage());
                (full_name, usage.trim_end().to_string(), op.help.clone())
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows.into_iter().map(|(_, usage, help)| (usage, help)).collect()
    }

    fn usage_text(&self) -> String {
        match &self.config.usage {
            Some(usage) => usage.trim_end().to_string(),
            None => default_usage(&self.config.name),
        }
    }
}

/// `nscli 0.1.0`
pub fn version_line(program: &str) -> String {
    format!("{} {}", program, crate::VERSION)
}

fn default_usage(program: &str) -> String {
    format!(
        "Run `{0} COMMAND -h` for help on a command.\n\
         Commands may be shortened while unambiguous, e.g. `{0} sub:good` for `{0} sub:goodbye`.\n\
         Use `{0} --all` to include hidden commands.",
        program
    )
}
