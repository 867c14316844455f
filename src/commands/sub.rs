//! `sub` command group

use crate::cli::{Context, Invocation};
use crate::registry::{GroupSpec, OperationSpec};
use std::io::Write;

pub fn group() -> GroupSpec {
    GroupSpec::new("sub").desc("Example subcommands").operation(
        OperationSpec::new("goodbye", goodbye)
            .params(["name"])
            .arity(1)
            .option("noop")
            .desc("Say goodbye to NAME"),
    )
}

fn goodbye(ctx: &mut Context<'_>, inv: &Invocation) -> anyhow::Result<()> {
    let name = inv.param("name").unwrap_or_default();
    if inv.flag("noop") {
        writeln!(ctx.out(), "NOOP: would say goodbye to {}", name)?;
    } else {
        writeln!(ctx.out(), "Goodbye {}", name)?;
    }
    Ok(())
}
