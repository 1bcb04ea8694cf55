//! SQL script writer

use super::OutputTarget;
use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

impl OutputTarget {
    /// Parse an output destination string.
    ///
    /// `duckdb://<path>` selects direct database insertion (empty path means
    /// an in-memory database); a path ending in `.sql` selects script
    /// output. Anything else is a validation error.
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(path) = s.strip_prefix("duckdb://") {
            return Ok(OutputTarget::Database {
                path: (!path.is_empty()).then(|| PathBuf::from(path)),
            });
        }

        if s.to_lowercase().ends_with(".sql") {
            return Ok(OutputTarget::SqlFile(PathBuf::from(s)));
        }

        Err(Error::validation(format!(
            "Unsupported output '{s}': expected a .sql file path or a duckdb:// URL"
        )))
    }
}

/// Write a SQL script: CREATE TABLE, blank line, then one INSERT per line
pub fn write_sql_file(path: &Path, create: &str, inserts: &[String]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "{create}")?;
    writeln!(file)?;
    for insert in inserts {
        writeln!(file, "{insert}")?;
    }

    tracing::info!(path = %path.display(), statements = inserts.len() + 1, "wrote SQL script");
    Ok(())
}
