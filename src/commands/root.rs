//! Root command group: `hello`, `completion`, `version`, `commands`

use crate::cli::{version_line, Context, Invocation};
use crate::completion::Completer;
use crate::registry::{GroupSpec, OperationSpec};
use std::io::Write;

pub fn group() -> GroupSpec {
    GroupSpec::root()
        .shared_option("verbose")
        .operation(
            OperationSpec::new("hello", hello)
                .params(["name"])
                .arity(1)
                .option("loud")
                .desc("Say hello to NAME"),
        )
        .operation(
            OperationSpec::new("completion", completion)
                .params(["params"])
                .arity(-1)
                .passthrough()
                .desc("Print words for shell auto-completion"),
        )
        .operation(OperationSpec::new("version", version).desc("Print the version"))
        .operation(
            OperationSpec::new("commands", commands)
                .hidden()
                .desc("List every registered command"),
        )
}

fn hello(ctx: &mut Context<'_>, inv: &Invocation) -> anyhow::Result<()> {
    let name = inv.param("name").unwrap_or_default();
    if inv.flag("loud") {
        writeln!(ctx.out(), "HELLO {}!", name.to_uppercase())?;
    } else {
        writeln!(ctx.out(), "Hello {}", name)?;
    }
    Ok(())
}

fn completion(ctx: &mut Context<'_>, inv: &Invocation) -> anyhow::Result<()> {
    let candidates = Completer::new(ctx.registry).complete(inv.values("params"));
    let out = ctx.out();
    for candidate in candidates {
        writeln!(out, "{}", candidate)?;
    }
    Ok(())
}

fn version(ctx: &mut Context<'_>, _inv: &Invocation) -> anyhow::Result<()> {
    let line = version_line(ctx.program());
    writeln!(ctx.out(), "{}", line)?;
    Ok(())
}

fn commands(ctx: &mut Context<'_>, inv: &Invocation) -> anyhow::Result<()> {
    let registry = ctx.registry;
    let out = ctx.out();
    for name in registry.full_names() {
        match registry.lookup(name) {
            Some((_, op)) if inv.flag("verbose") && !op.help.is_empty() => {
                writeln!(out, "{}\t{}", name, op.help)?
            }
            _ => writeln!(out, "{}", name)?,
        }
    }
    Ok(())
}
