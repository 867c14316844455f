//! CLI interface
//!
//! This module dispatches resolved commands to their handlers, builds clap
//! command trees from the registry and prints the top-level help.

pub mod app;
pub mod command;
pub mod context;
pub mod dispatch;

// Re-export main types
pub use app::*;
pub use context::*;
pub use dispatch::*;
