//! CLI command implementations for android-meminfo.
//!
//! This module provides implementations for all CLI subcommands:
//! - `parse`: Report document generation (also the default action)
//! - `query`: Single-process field lookup
//! - `config`: Configuration file generation

pub mod config;
pub mod parse;
pub mod query;

// Re-export command functions
pub use config::command_config;
pub use parse::command_parse;
pub use query::command_query;
