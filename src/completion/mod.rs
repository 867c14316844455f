//! Shell completion
//!
//! This module produces completion candidates for partially typed command
//! lines and the shell scripts that ask for them.

pub mod engine;
pub mod script;

// Re-export main types
pub use engine::*;
pub use script::*;
