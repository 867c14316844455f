//! nscli - A namespaced command router with shell completion
//!
//! Commands live in groups ("namespaces") and are addressed as
//! `group:operation`. Typed commands may be abbreviated while unambiguous,
//! help flags may appear anywhere, and a completion protocol feeds shell
//! completion scripts.

// Public modules
pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod routing;

// Re-export commonly used types
pub use error::{NscliError, Result};

/// Current version of nscli
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
