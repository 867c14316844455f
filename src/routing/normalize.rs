//! Argument list normalization
//!
//! Operations are parsed with their bare name first and help requested as
//! `help <operation>`. Users type namespaced names and put help flags
//! anywhere, so the raw list is rewritten before parsing:
//!
//! ```text
//! sub:good Alice --help   =>  help goodbye Alice
//! sub:good Alice --noop   =>  goodbye Alice --noop
//! ```
//!
//! Tokens after a passthrough operation are data for its handler, so help
//! tokens among them are left in place.

use crate::routing::{operation_of, FlagSet, Resolver};

/// Result of normalizing a raw argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// Resolved FullCommandName, or the candidate as typed
    pub command: Option<String>,

    /// Bare operation name taken from `command`
    pub operation: Option<String>,

    /// Whether any help token appeared in the raw list
    pub help_requested: bool,

    /// Rewritten argument list, `help` first when help was requested
    pub args: Vec<String>,
}

impl ParsedInvocation {
    /// Tokens after the operation name, without help or namespace tokens
    pub fn remaining(&self) -> &[String] {
        let skip = usize::from(self.help_requested) + usize::from(self.operation.is_some());
        self.args.get(skip..).unwrap_or(&[])
    }
}

/// Rewrites raw argument lists for operation parsing
pub struct Normalizer<'a> {
    resolver: Resolver<'a>,
    flags: &'a FlagSet,
}

impl<'a> Normalizer<'a> {
    pub fn new(resolver: Resolver<'a>, flags: &'a FlagSet) -> Self {
        Normalizer { resolver, flags }
    }

    /// First raw token that is neither a flag nor a help token, resolved
    pub fn command(&self, raw_args: &[String]) -> Option<String> {
        self.locate(raw_args).map(|(_, command)| command)
    }

    /// Position of the command candidate and its resolved name
    fn locate(&self, raw_args: &[String]) -> Option<(usize, String)> {
        raw_args
            .iter()
            .position(|arg| self.flags.is_candidate(arg))
            .map(|i| (i, self.resolver.resolve(&raw_args[i])))
    }

    /// Normalize a raw argument list
    pub fn normalize(&self, raw_args: &[String]) -> ParsedInvocation {
        let located = self.locate(raw_args);

        // Help tokens only count up to this index
        let help_end = match &located {
            Some((i, command)) if self.is_passthrough(command) => i + 1,
            _ => raw_args.len(),
        };
        let is_help = |i: usize, arg: &str| i < help_end && self.flags.is_help(arg);

        let command = located.map(|(_, command)| command);
        let operation = command.as_deref().map(|c| operation_of(c).to_string());

        let help_requested = raw_args.iter().enumerate().any(|(i, arg)| is_help(i, arg));

        let mut args: Vec<Option<String>> = raw_args
            .iter()
            .enumerate()
            .filter(|(i, arg)| !is_help(*i, arg))
            .map(|(_, arg)| Some(arg.clone()))
            .collect();

        // The first slot always holds the bare operation name
        match args.first_mut() {
            Some(first) => *first = operation.clone(),
            None => args.push(operation.clone()),
        }

        if help_requested {
            args.insert(0, Some("help".to_string()));
        }

        ParsedInvocation {
            command,
            operation,
            help_requested,
            args: args.into_iter().flatten().collect(),
        }
    }

    fn is_passthrough(&self, command: &str) -> bool {
        self.resolver
            .registry()
            .lookup(command)
            .is_some_and(|(_, op)| op.passthrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Context, Invocation};
    use crate::registry::{GroupSpec, OperationSpec, Registry};

    fn noop(_: &mut Context<'_>, _: &Invocation) -> anyhow::Result<()> {
        Ok(())
    }

    fn registry() -> Registry {
        Registry::builder()
            .group(
                GroupSpec::root()
                    .operation(OperationSpec::new("hello", noop).params(["name"]).arity(1))
                    .operation(
                        OperationSpec::new("completion", noop)
                            .params(["params"])
                            .arity(-1)
                            .passthrough(),
                    ),
            )
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

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_namespace_is_stripped() {
        let registry = registry();
        let flags = FlagSet::default();
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);

        let parsed = normalizer.normalize(&args(&["sub:good", "Alice", "--noop"]));
        assert_eq!(parsed.command.as_deref(), Some("sub:goodbye"));
        assert_eq!(parsed.args, args(&["goodbye", "Alice", "--noop"]));
        assert_eq!(parsed.remaining(), &args(&["Alice", "--noop"])[..]);
        assert!(!parsed.help_requested);
    }

    #[test]
    fn test_help_token_anywhere_moves_to_front() {
        let registry = registry();
        let flags = FlagSet::default();
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);
        let expected = args(&["help", "goodbye", "Alice", "--noop"]);

        for help in ["help", "-h", "--help", "-?", "-D"] {
            for position in 0..4 {
                let mut raw = args(&["sub:goodbye", "Alice", "--noop"]);
                raw.insert(position, help.to_string());
                let parsed = normalizer.normalize(&raw);
                assert_eq!(parsed.args, expected, "help {} at {}", help, position);
                assert_eq!(parsed.remaining(), &expected[2..]);
            }
        }
    }

    #[test]
    fn test_all_help_tokens_are_removed() {
        let registry = registry();
        let flags = FlagSet::default();
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);

        let parsed = normalizer.normalize(&args(&["-h", "hello", "--help", "Bob"]));
        assert_eq!(parsed.args, args(&["help", "hello", "Bob"]));
    }

    #[test]
    fn test_help_only() {
        let registry = registry();
        let flags = FlagSet::default();
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);

        let parsed = normalizer.normalize(&args(&["--help"]));
        assert_eq!(parsed.command, None);
        assert_eq!(parsed.args, args(&["help"]));
        assert!(parsed.remaining().is_empty());
    }

    #[test]
    fn test_empty_and_flag_only_input_compacts() {
        let registry = registry();
        let flags = FlagSet::default();
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);

        assert!(normalizer.normalize(&[]).args.is_empty());
        let parsed = normalizer.normalize(&args(&["--all", "-x"]));
        assert_eq!(parsed.args, args(&["-x"]));
    }

    #[test]
    fn test_configured_help_alias() {
        let registry = registry();
        let flags = FlagSet::with_help_aliases(["-H"]);
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);

        let parsed = normalizer.normalize(&args(&["he", "-H"]));
        assert_eq!(parsed.args, args(&["help", "hello"]));
    }

    #[test]
    fn test_unresolved_command_keeps_bare_trailing_segment() {
        let registry = registry();
        let flags = FlagSet::default();
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);

        let parsed = normalizer.normalize(&args(&["nope:thing", "x"]));
        assert_eq!(parsed.command.as_deref(), Some("nope:thing"));
        assert_eq!(parsed.args, args(&["thing", "x"]));
    }

    #[test]
    fn test_help_tokens_after_passthrough_operation_are_data() {
        let registry = registry();
        let flags = FlagSet::default();
        let normalizer = Normalizer::new(Resolver::new(&registry), &flags);

        let parsed = normalizer.normalize(&args(&["completion", "hello", "-h"]));
        assert!(!parsed.help_requested);
        assert_eq!(parsed.args, args(&["completion", "hello", "-h"]));

        let parsed = normalizer.normalize(&args(&["comp", "help", "--help"]));
        assert_eq!(parsed.command.as_deref(), Some("completion"));
        assert_eq!(parsed.args, args(&["completion", "help", "--help"]));

        let parsed = normalizer.normalize(&args(&["-h", "completion", "hello"]));
        assert!(parsed.help_requested);
        assert_eq!(parsed.args, args(&["help", "completion", "hello"]));
    }
}
