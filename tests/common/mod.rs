//! Common test utilities

#![allow(dead_code)]

use nscli::cli::{Context, Invocation};
use nscli::registry::{GroupSpec, OperationSpec, Registry};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn say(ctx: &mut Context<'_>, inv: &Invocation) -> anyhow::Result<()> {
    writeln!(ctx.out(), "{} {:?} {:?}", inv.command, inv.params, inv.flags)?;
    Ok(())
}

/// Root group with `hello NAME`, group `sub` with `goodbye NAME [--noop]`
pub fn scenario_registry() -> Registry {
    Registry::builder()
        .group(GroupSpec::root().operation(
            OperationSpec::new("hello", say).params(["name"]).arity(1).desc("Say hello"),
        ))
        .group(
            GroupSpec::new("sub").operation(
                OperationSpec::new("goodbye", say)
                    .params(["name"])
                    .arity(1)
                    .option("noop")
                    .desc("Say goodbye"),
            ),
        )
        .build()
        .unwrap()
}

/// Group holding both `go` and `goodbye`, plus a nested group
pub fn ambiguous_registry() -> Registry {
    Registry::builder()
        .group(GroupSpec::root().operation(OperationSpec::new("hello", say)))
        .group(
            GroupSpec::new("group")
                .operation(OperationSpec::new("go", say))
                .operation(OperationSpec::new("goodbye", say))
                .operation(OperationSpec::new("gone", say)),
        )
        .group(
            GroupSpec::new("aws/task_definition")
                .operation(OperationSpec::new("register", say).params(["family"]).arity(1))
                .operation(OperationSpec::new("render", say).params(["family"]).arity(1)),
        )
        .build()
        .unwrap()
}

/// Turn string literals into an argument list
pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

/// Create a temporary directory with an nscli.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nscli.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a test config in a subdirectory
pub fn create_test_config_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nscli.yml");
    let sub_dir = temp_dir.path().join("subdir");

    fs::write(&config_path, content).unwrap();
    fs::create_dir(&sub_dir).unwrap();

    (temp_dir, config_path, sub_dir)
}
