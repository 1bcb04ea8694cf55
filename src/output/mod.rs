//! Output sinks
//!
//! Generated SQL goes either to a `.sql` script file or straight into a
//! DuckDB database (see [`crate::database`]).

mod writer;

pub use writer::write_sql_file;

use std::path::PathBuf;

/// Where generated output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write a SQL script to this path
    SqlFile(PathBuf),
    /// Insert rows directly into a DuckDB database (`None` = in-memory)
    Database { path: Option<PathBuf> },
}
