//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::database::DatabaseSink;
use crate::decode::{load_records, InputFormat};
use crate::editor::{ConsoleEditor, SchemaEditor};
use crate::error::Result;
use crate::output::{write_sql_file, OutputTarget};
use crate::schema::{SchemaBuilder, TableSchema};
use crate::sql::{
    coerce_rows, is_valid_identifier, render_create_table, render_inserts, CoercedRows,
};
use serde_json::Value;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Convert {
                file,
                format,
                table,
                output,
                preview,
                interactive,
            } => self.convert(
                file,
                *format,
                table,
                output.as_deref(),
                *preview,
                *interactive,
            ),
        }
    }

    /// Full conversion pipeline: load, infer, optionally edit, generate, write
    fn convert(
        &self,
        file: &Path,
        format: Option<InputFormat>,
        table: &str,
        output: Option<&str>,
        preview: bool,
        interactive: bool,
    ) -> Result<()> {
        // Validate the table name and output target up front so bad inputs
        // fail before any work is done
        if !is_valid_identifier(table) {
            return Err(crate::error::Error::InvalidTableName {
                name: table.to_string(),
            });
        }
        let target = output.map(OutputTarget::parse).transpose()?;

        let records = load_records(file, format)?;
        tracing::info!(records = records.len(), file = %file.display(), "loaded input");

        let mut schema = SchemaBuilder::new().build(&records)?;

        // Preview short-circuits after inference: no generation, no writes
        if preview {
            self.print_schema(&schema);
            return Ok(());
        }

        if interactive {
            self.print_schema(&schema);
            let stdin = std::io::stdin();
            let mut editor = ConsoleEditor::new(stdin.lock(), std::io::stderr());
            schema = editor.edit(schema)?;
        }

        let create = render_create_table(table, &schema)?;
        let coerced = coerce_rows(&schema, &records);

        match target {
            Some(OutputTarget::SqlFile(path)) => {
                let inserts = render_inserts(table, &schema, &coerced.rows);
                write_sql_file(&path, &create, &inserts)?;
                println!("SQL has been written to: {}", path.display());
            }
            Some(OutputTarget::Database { path }) => {
                let sink = match path {
                    Some(ref p) => DatabaseSink::open(p)?,
                    None => DatabaseSink::open_in_memory()?,
                };
                let inserted = sink.write(table, &schema, &create, &coerced.rows)?;
                println!("Inserted {inserted} rows into table '{table}'");
            }
            None => self.print_statements(table, &schema, &create, &coerced),
        }

        self.summarize(&records, &coerced);
        Ok(())
    }

    /// Print the inferred schema, one field per line
    fn print_schema(&self, schema: &TableSchema) {
        println!("Inferred Schema:");
        for field in schema {
            let null_note = if field.nullable { "" } else { " NOT NULL" };
            println!("  {}: {}{}", field.name, field.sql_type, null_note);
        }
    }

    /// Print the CREATE TABLE and the first few INSERTs
    fn print_statements(
        &self,
        table: &str,
        schema: &TableSchema,
        create: &str,
        coerced: &CoercedRows,
    ) {
        let inserts = render_inserts(table, schema, &coerced.rows);

        println!("Generated SQL:");
        println!("{create}");
        println!("\nFirst few INSERT statements:");
        for stmt in inserts.iter().take(3) {
            println!("{stmt}");
        }
        if inserts.len() > 3 {
            println!("... and {} more INSERT statements", inserts.len() - 3);
        }
    }

    /// Report skipped records at the end of the run
    fn summarize(&self, records: &[Value], coerced: &CoercedRows) {
        if coerced.skipped.is_empty() {
            tracing::info!(emitted = coerced.rows.len(), "conversion complete");
            return;
        }

        tracing::warn!(
            emitted = coerced.rows.len(),
            skipped = coerced.skipped.len(),
            total = records.len(),
            "some records were skipped"
        );
        for skip in &coerced.skipped {
            tracing::warn!(record = skip.index, reason = %skip.reason, "skipped");
        }
    }
}
