//! Structural flag sets recognized before any operation-specific parsing

/// Tokens that request help, wherever they appear
pub const HELP_FLAGS: &[&str] = &["-h", "-?", "--help", "-D", "help"];

/// Tokens that request version output when given alone
pub const VERSION_FLAGS: &[&str] = &["--version", "-v"];

/// Tokens that reveal hidden operations in the help listing
pub const SHOW_ALL_FLAGS: &[&str] = &["--all", "-A"];

/// Marker that starts every option token
pub const OPTION_MARKER: char = '-';

/// The help, version and show-all token sets in effect for one process
#[derive(Debug, Clone)]
pub struct FlagSet {
    help: Vec<String>,
    version: Vec<String>,
    show_all: Vec<String>,
}

impl FlagSet {
    /// Built-in flags plus any configured help aliases
    pub fn with_help_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut flags = Self::default();
        for alias in aliases {
            let alias = alias.into();
            if !flags.help.contains(&alias) {
                flags.help.push(alias);
            }
        }
        flags
    }

    pub fn is_help(&self, token: &str) -> bool {
        self.help.iter().any(|h| h == token)
    }

    pub fn is_version(&self, token: &str) -> bool {
        self.version.iter().any(|v| v == token)
    }

    pub fn is_show_all(&self, token: &str) -> bool {
        self.show_all.iter().any(|s| s == token)
    }

    pub fn help_flags(&self) -> &[String] {
        &self.help
    }

    /// Whether a raw token is a command candidate rather than a flag or help token
    pub fn is_candidate(&self, token: &str) -> bool {
        !token.starts_with(OPTION_MARKER) && !self.is_help(token)
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        FlagSet {
            help: HELP_FLAGS.iter().map(|s| s.to_string()).collect(),
            version: VERSION_FLAGS.iter().map(|s| s.to_string()).collect(),
            show_all: SHOW_ALL_FLAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
