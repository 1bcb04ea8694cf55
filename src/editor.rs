//! Interactive schema editing
//!
//! Presents an inferred schema field-by-field and lets a human override the
//! type and nullability before generation. The field set and order never
//! change.

use crate::error::{Error, Result};
use crate::schema::{SqlType, TableSchema};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Seam for schema override strategies
pub trait SchemaEditor {
    /// Present the schema and return it with any user overrides applied
    fn edit(&mut self, schema: TableSchema) -> Result<TableSchema>;
}

/// Override parsed from one line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOverride {
    /// New column type
    pub sql_type: SqlType,
    /// New nullability, when the user spelled one out
    pub nullable: Option<bool>,
}

/// Parse one line of editor input.
///
/// Accepted forms: empty (keep inference), `TYPE`, `TYPE NULL`,
/// `TYPE NOT NULL`. Anything else is an interactive input error, which the
/// console editor recovers from by reprompting.
pub fn parse_override(line: &str) -> Result<Option<FieldOverride>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let upper = trimmed.to_uppercase();
    let (type_part, nullable) = if let Some(prefix) = upper.strip_suffix("NOT NULL") {
        (prefix.trim_end().to_string(), Some(false))
    } else if let Some(prefix) = upper.strip_suffix("NULL") {
        (prefix.trim_end().to_string(), Some(true))
    } else {
        (upper, None)
    };

    if type_part.is_empty() {
        return Err(Error::InteractiveInput {
            input: trimmed.to_string(),
        });
    }

    let sql_type = SqlType::from_str(&type_part)?;
    Ok(Some(FieldOverride { sql_type, nullable }))
}

/// Console editor reading overrides from an input stream.
///
/// Generic over reader/writer so tests can drive it with cursors; the runner
/// wires it to stdin/stderr.
pub struct ConsoleEditor<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleEditor<R, W> {
    /// Create an editor over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt_field(&mut self, name: &str, sql_type: SqlType, nullable: bool) -> Result<Option<FieldOverride>> {
        loop {
            let null_note = if nullable { "" } else { " NOT NULL" };
            write!(
                self.output,
                "Field '{name}' (detected as {sql_type}{null_note}) [TEXT/INTEGER/REAL/DATE/BOOLEAN, empty keeps]: "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF keeps the remaining inferences
                return Ok(None);
            }

            match parse_override(&line) {
                Ok(result) => return Ok(result),
                Err(e) if e.is_recoverable() => {
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead, W: Write> SchemaEditor for ConsoleEditor<R, W> {
    fn edit(&mut self, mut schema: TableSchema) -> Result<TableSchema> {
        writeln!(self.output, "Confirm or modify the inferred schema:")?;

        for field in &mut schema.fields {
            if let Some(over) = self.prompt_field(&field.name, field.sql_type, field.nullable)? {
                field.sql_type = over.sql_type;
                if let Some(nullable) = over.nullable {
                    field.nullable = nullable;
                }
            }
        }

        Ok(schema)
    }
}
