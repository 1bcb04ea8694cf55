//! CLI module
//!
//! Command-line interface for the converter.
//!
//! # Commands
//!
//! - `convert` - Infer a schema from a JSON/CSV file and emit SQL

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
