//! clap command trees built from the registry
//!
//! Each group becomes a clap command with one subcommand per operation, so
//! a normalized argument list (`goodbye Alice --noop`, `help goodbye`) can
//! be parsed with clap's own help handling.

use crate::cli::Invocation;
use crate::registry::{long_name, GroupSpec, OperationSpec, Registry, HELP_OPERATION};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use std::iter;

/// Build the subcommand for one operation under the given name
pub fn operation_command(
    program: &str,
    group: &GroupSpec,
    op: &OperationSpec,
    name: String,
) -> Command {
    let mut cmd = Command::new(name)
        .about(op.help.clone())
        .hide(op.hidden)
        .override_usage(usage_line(program, group, op));

    // Help tokens typed after a passthrough operation are its arguments
    if op.passthrough {
        cmd = cmd.disable_help_flag(true);
    }

    let last = op.params.len().saturating_sub(1);
    for (i, param) in op.params.iter().enumerate() {
        let mut arg = Arg::new(param.clone()).value_name(param.to_uppercase());

        if i == last && op.arity.is_variadic() {
            arg = arg.num_args(0..).action(ArgAction::Append);
            if op.passthrough {
                arg = arg.allow_hyphen_values(true).trailing_var_arg(true);
            }
        } else {
            arg = arg.required(true);
        }

        cmd = cmd.arg(arg);
    }

    if !op.passthrough {
        for option in group.options_for(op) {
            cmd = cmd.arg(
                Arg::new(option.to_string())
                    .long(long_name(option))
                    .action(ArgAction::SetTrue),
            );
        }
    }

    cmd
}

/// Build the command for a whole group, parsed with bare operation names
pub fn group_command(program: &str, group: &GroupSpec) -> Command {
    let mut cmd = Command::new(program.to_string())
        .bin_name(program.to_string())
        .subcommand_required(true)
        .disable_version_flag(true);

    if !group.description.is_empty() {
        cmd = cmd.about(group.description.clone());
    }

    for op in group.operations() {
        cmd = cmd.subcommand(operation_command(program, group, op, op.name.clone()));
    }

    cmd
}

/// Build one command covering every visible operation under its FullCommandName
pub fn registry_command(program: &str, registry: &Registry) -> Command {
    let mut cmd = Command::new(program.to_string())
        .bin_name(program.to_string())
        .version(crate::VERSION);

    for group in registry.discover_all() {
        for op in group.operations() {
            if op.hidden || op.name == HELP_OPERATION {
                continue;
            }
            cmd = cmd.subcommand(operation_command(program, group, op, op.full_name()));
        }
    }

    cmd
}

/// Parse a normalized argument list for an operation of `group`
///
/// Help requests come back as clap errors of kind `DisplayHelp`.
pub fn parse_invocation(
    program: &str,
    group: &GroupSpec,
    args: &[String],
) -> Result<Invocation, clap::Error> {
    let mut cmd = group_command(program, group);
    let argv = iter::once(program.to_string()).chain(args.iter().cloned());
    let matches = cmd.try_get_matches_from_mut(argv)?;

    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| cmd.error(ErrorKind::MissingSubcommand, "no operation given"))?;
    let op = group.lookup(name).ok_or_else(|| {
        cmd.error(
            ErrorKind::InvalidSubcommand,
            format!("unknown operation '{}'", name),
        )
    })?;

    let mut invocation = Invocation::new(op.full_name());
    for param in &op.params {
        if let Some(values) = sub.get_many::<String>(param) {
            invocation
                .params
                .insert(param.clone(), values.cloned().collect());
        }
    }

    if !op.passthrough {
        for option in group.options_for(op) {
            if sub.get_flag(option) {
                invocation.flags.insert(option.to_string());
            }
        }
    }

    Ok(invocation)
}

/// Whether a clap error is really a help or version display
pub fn is_display(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion
    )
}

/// `nscli sub:goodbye <NAME> [OPTIONS]`
fn usage_line(program: &str, group: &GroupSpec, op: &OperationSpec) -> String {
    let mut parts = vec![program.to_string(), op.full_name()];

    let last = op.params.len().saturating_sub(1);
    for (i, param) in op.params.iter().enumerate() {
        let value = param.to_uppercase();
        if i == last && op.arity.is_variadic() {
            parts.push(format!("[{}]...", value));
        } else {
            parts.push(format!("<{}>", value));
        }
    }

    if !op.passthrough && !group.options_for(op).is_empty() {
        parts.push("[OPTIONS]".to_string());
    }

    parts.join(" ")
}
