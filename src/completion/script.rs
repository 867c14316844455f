//! Shell completion scripts
//!
//! Bash and zsh get a small hook that asks the binary itself for
//! candidates (`<program> completion <words...>`), so abbreviations,
//! parameter hints and used flags are always current. Other shells get a
//! static script generated by clap_complete from the registry.

use crate::cli::command::registry_command;
use crate::registry::Registry;
use clap_complete::Shell;
use std::io::{self, Write};

/// Shells a completion script can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptShell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl ScriptShell {
    /// Pick the shell from the option flags of `completions:script`
    pub fn from_flags(flag: impl Fn(&str) -> bool) -> Self {
        if flag("zsh") {
            ScriptShell::Zsh
        } else if flag("fish") {
            ScriptShell::Fish
        } else if flag("powershell") {
            ScriptShell::PowerShell
        } else if flag("elvish") {
            ScriptShell::Elvish
        } else {
            ScriptShell::Bash
        }
    }
}

/// Write the completion script for `shell`
pub fn generate(
    shell: ScriptShell,
    program: &str,
    registry: &Registry,
    out: &mut dyn Write,
) -> io::Result<()> {
    match shell {
        ScriptShell::Bash => out.write_all(bash_hook(program).as_bytes()),
        ScriptShell::Zsh => {
            writeln!(out, "autoload -U +X bashcompinit && bashcompinit")?;
            out.write_all(bash_hook(program).as_bytes())
        }
        ScriptShell::Fish => static_script(Shell::Fish, program, registry, out),
        ScriptShell::PowerShell => static_script(Shell::PowerShell, program, registry, out),
        ScriptShell::Elvish => static_script(Shell::Elvish, program, registry, out),
    }
}

fn static_script(
    shell: Shell,
    program: &str,
    registry: &Registry,
    out: &mut dyn Write,
) -> io::Result<()> {
    let mut cmd = registry_command(program, registry);
    clap_complete::generate(shell, &mut cmd, program, out);
    Ok(())
}

/// Bash completion function that delegates to `<program> completion`
fn bash_hook(program: &str) -> String {
    let function: String = program
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!(
        r#"_{function}() {{
  local cur words cword
  if declare -F _get_comp_words_by_ref >/dev/null 2>&1; then
    _get_comp_words_by_ref -n : cur words cword
  else
    cur="${{COMP_WORDS[COMP_CWORD]}}"
    words=("${{COMP_WORDS[@]}}")
    cword=$COMP_CWORD
  fi

  local completions
  completions=$({program} completion "${{words[@]:1:$((cword - 1))}}")
  COMPREPLY=( $(compgen -W "$completions" -- "$cur") )

  if declare -F __ltrim_colon_completions >/dev/null 2>&1; then
    __ltrim_colon_completions "$cur"
  fi
}}
complete -F _{function} {program}
"#,
        function = function,
        program = program
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Context, Invocation};
    use crate::registry::{GroupSpec, OperationSpec};

    fn noop(_: &mut Context<'_>, _: &Invocation) -> anyhow::Result<()> {
        Ok(())
    }

    fn registry() -> Registry {
        Registry::builder()
            .group(
                GroupSpec::new("sub").operation(
                    OperationSpec::new("goodbye", noop)
                        .params(["name"])
                        .arity(1)
                        .option("noop"),
                ),
            )
            .build()
            .unwrap()
    }

    fn render(shell: ScriptShell, program: &str) -> String {
        let mut out = Vec::new();
        generate(shell, program, &registry(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(ScriptShell::from_flags(|_| false), ScriptShell::Bash);
        assert_eq!(ScriptShell::from_flags(|f| f == "fish"), ScriptShell::Fish);
        assert_eq!(
            ScriptShell::from_flags(|f| f == "zsh" || f == "fish"),
            ScriptShell::Zsh
        );
    }

    #[test]
    fn test_bash_hook_calls_completion() {
        let script = render(ScriptShell::Bash, "nscli");
        assert!(script.contains("_nscli() {"));
        assert!(script.contains("nscli completion \"${words[@]:1:$((cword - 1))}\""));
        assert!(script.ends_with("complete -F _nscli nscli\n"));
    }

    #[test]
    fn test_function_name_is_sanitized() {
        let script = render(ScriptShell::Bash, "my-cli");
        assert!(script.contains("_my_cli() {"));
        assert!(script.contains("complete -F _my_cli my-cli"));
    }

    #[test]
    fn test_zsh_enables_bashcompinit() {
        let script = render(ScriptShell::Zsh, "nscli");
        assert!(script.starts_with("autoload -U +X bashcompinit && bashcompinit\n"));
    }

    #[test]
    fn test_fish_script_lists_full_names() {
        let script = render(ScriptShell::Fish, "nscli");
        assert!(script.contains("sub:goodbye"));
        assert!(script.contains("noop"));
    }
}
