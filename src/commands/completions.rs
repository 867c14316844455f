//! `completions` command group

use crate::cli::{Context, Invocation};
use crate::completion::{generate, ScriptShell};
use crate::registry::{GroupSpec, OperationSpec};

/// Declared identity; the registry alias table maps it to `completions`
pub const IDENTITY: &str = "completion";

pub fn group() -> GroupSpec {
    GroupSpec::new(IDENTITY)
        .desc("Shell completion setup")
        .operation(
            OperationSpec::new("script", script)
                .option("zsh")
                .option("fish")
                .option("powershell")
                .option("elvish")
                .desc("Print a script that can be eval'd to set up auto-completion"),
        )
}

fn script(ctx: &mut Context<'_>, inv: &Invocation) -> anyhow::Result<()> {
    let shell = ScriptShell::from_flags(|flag| inv.flag(flag));
    let registry = ctx.registry;
    let program = ctx.config.name.clone();
    generate(shell, &program, registry, ctx.out())?;
    Ok(())
}
