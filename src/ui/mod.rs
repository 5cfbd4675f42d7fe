//! User interface and interaction
//!
//! CLI parsing and output rendering.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::{SourceResult, render};
