//! Operation and group declarations
//!
//! These are the plain data structures each command group hands to the
//! registry at startup. Nothing here is inferred from handler signatures.

use crate::cli::{Context, Invocation};

/// Handler invoked once an operation has been resolved and its arguments parsed
pub type Handler = fn(&mut Context<'_>, &Invocation) -> anyhow::Result<()>;

/// Identity of the root group, whose namespace is empty
pub const ROOT_IDENTITY: &str = "main";

/// Number of positional parameters an operation declares
///
/// Registrations supply a signed count: a negative value marks the last
/// parameter as variadic. Only the magnitude matters when deciding where
/// positional parameters end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic(usize),
}

impl Arity {
    /// Build an arity from its signed registration form
    pub fn from_signed(arity: i32) -> Self {
        let count = arity.unsigned_abs() as usize;
        if arity < 0 {
            Arity::Variadic(count)
        } else {
            Arity::Fixed(count)
        }
    }

    /// Signed registration form
    pub fn signed(self) -> i32 {
        match self {
            Arity::Fixed(n) => i32::try_from(n).unwrap_or(i32::MAX),
            Arity::Variadic(n) => i32::try_from(n).map_or(i32::MIN, |n| -n),
        }
    }

    /// Count of positional slots, ignoring direction
    pub fn boundary(self) -> usize {
        match self {
            Arity::Fixed(n) | Arity::Variadic(n) => n,
        }
    }

    pub fn is_variadic(self) -> bool {
        matches!(self, Arity::Variadic(_))
    }
}

impl Default for Arity {
    fn default() -> Self {
        Arity::Fixed(0)
    }
}

/// One invocable operation within a group
#[derive(Debug, Clone)]
pub struct OperationSpec {
    /// Namespace of the owning group, filled in at discovery
    pub(crate) group: String,

    /// Operation name, unique within its group
    pub name: String,

    /// Positional parameter names in declaration order
    pub params: Vec<String>,

    pub arity: Arity,

    /// Boolean flags accepted by this operation only
    pub options: Vec<String>,

    /// One-line description for help listings
    pub help: String,

    /// Hidden operations are left out of the help listing unless asked for
    pub hidden: bool,

    /// Hand every token after the operation name to the handler verbatim
    pub passthrough: bool,

    pub handler: Handler,
}

impl OperationSpec {
    /// Create an operation with no parameters and no options
    pub fn new(name: impl Into<String>, handler: Handler) -> Self {
        OperationSpec {
            group: String::new(),
            name: name.into(),
            params: Vec::new(),
            arity: Arity::default(),
            options: Vec::new(),
            help: String::new(),
            hidden: false,
            passthrough: false,
            handler,
        }
    }

    /// Declare the positional parameter names
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the signed arity
    pub fn arity(mut self, arity: i32) -> Self {
        self.arity = Arity::from_signed(arity);
        self
    }

    /// Add a boolean option flag
    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.options.push(name.into());
        self
    }

    pub fn desc(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    /// Namespace of the owning group (empty for the root group)
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Canonical `group:operation` name, or the bare name in the root group
    pub fn full_name(&self) -> String {
        full_command_name(&self.group, &self.name)
    }

    /// Usage fragment for the positional parameters, e.g. `NAME [PARAMS...]`
    pub fn params_usage(&self) -> String {
        let last = self.params.len().saturating_sub(1);
        self.params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == last && self.arity.is_variadic() {
                    format!("[{}...]", p.to_uppercase())
                } else {
                    p.to_uppercase()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A named collection of operations sharing one namespace
#[derive(Debug, Clone)]
pub struct GroupSpec {
    /// Declared identity, e.g. `main` or `aws/task_definition`
    pub identity: String,

    /// Colon-joined namespace, filled in at discovery
    pub(crate) namespace: String,

    pub description: String,

    /// Flags accepted by every operation in the group
    pub shared_options: Vec<String>,

    operations: Vec<OperationSpec>,
}

impl GroupSpec {
    pub fn new(identity: impl Into<String>) -> Self {
        GroupSpec {
            identity: identity.into(),
            namespace: String::new(),
            description: String::new(),
            shared_options: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// The root group
    pub fn root() -> Self {
        Self::new(ROOT_IDENTITY)
    }

    pub fn desc(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn operation(mut self, operation: OperationSpec) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn shared_option(mut self, name: impl Into<String>) -> Self {
        self.shared_options.push(name.into());
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_root(&self) -> bool {
        self.namespace.is_empty()
    }

    pub fn operations(&self) -> &[OperationSpec] {
        &self.operations
    }

    pub(crate) fn operations_mut(&mut self) -> &mut [OperationSpec] {
        &mut self.operations
    }

    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|op| op.name.as_str())
    }

    /// Look up an operation by its exact name
    pub fn lookup(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Operation options followed by group-wide options, without repeats
    pub fn options_for<'a>(&'a self, operation: &'a OperationSpec) -> Vec<&'a str> {
        let mut options: Vec<&str> = Vec::new();
        for name in operation.options.iter().chain(self.shared_options.iter()) {
            if !options.contains(&name.as_str()) {
                options.push(name);
            }
        }
        options
    }
}

/// Join a namespace and operation name into a FullCommandName
pub fn full_command_name(namespace: &str, operation: &str) -> String {
    if namespace.is_empty() {
        operation.to_string()
    } else {
        format!("{}:{}", namespace, operation)
    }
}

/// External spelling of an option: `dry_run` becomes `--dry-run`
pub fn flag_spelling(option: &str) -> String {
    format!("--{}", long_name(option))
}

/// Long flag name without the marker
pub fn long_name(option: &str) -> String {
    option.replace('_', "-")
}
