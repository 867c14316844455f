//! Command routing
//!
//! This module turns raw, user-typed argument lists into resolved
//! FullCommandNames and normalized argument lists.

pub mod flags;
pub mod normalize;
pub mod resolve;

// Re-export main types
pub use flags::*;
pub use normalize::*;
pub use resolve::*;
