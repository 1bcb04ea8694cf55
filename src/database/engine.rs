//! DuckDB insertion sink
//!
//! Executes the generated CREATE TABLE and inserts coerced rows as
//! parameterized statements. The rows carry the same values the SQL script
//! path renders as literals.

use crate::error::{Error, Result};
use crate::schema::TableSchema;
use crate::sql::SqlValue;
use duckdb::types::{ToSqlOutput, Value};
use duckdb::{params_from_iter, Connection, ToSql};
use std::path::Path;

impl ToSql for SqlValue {
    fn to_sql(&self) -> duckdb::Result<ToSqlOutput<'_>> {
        let value = match self {
            SqlValue::Null => Value::Null,
            SqlValue::Boolean(b) => Value::Boolean(*b),
            SqlValue::Integer(i) => Value::BigInt(*i),
            SqlValue::Real(f) => Value::Double(*f),
            // DuckDB casts date text to DATE columns on insert
            SqlValue::Date(d) => Value::Text(d.format("%Y-%m-%d").to_string()),
            SqlValue::Text(s) => Value::Text(s.clone()),
        };
        Ok(ToSqlOutput::Owned(value))
    }
}

/// Direct-insert sink backed by DuckDB
pub struct DatabaseSink {
    conn: Connection,
}

impl DatabaseSink {
    /// Open a database file, creating it if needed
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| Error::output(format!("Failed to open database {}: {e}", path.display())))?;
        Ok(Self { conn })
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::output(format!("Failed to create in-memory database: {e}")))?;
        Ok(Self { conn })
    }

    /// Create the table and insert all rows.
    ///
    /// Returns the number of rows inserted.
    pub fn write(
        &self,
        table: &str,
        schema: &TableSchema,
        create: &str,
        rows: &[Vec<SqlValue>],
    ) -> Result<usize> {
        self.conn.execute_batch(create)?;

        let columns: Vec<&str> = schema.iter().map(|f| f.name.as_str()).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let insert = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders
        );

        let mut stmt = self.conn.prepare(&insert)?;
        for row in rows {
            stmt.execute(params_from_iter(row.iter()))?;
        }

        tracing::info!(table, rows = rows.len(), "inserted rows");
        Ok(rows.len())
    }

    /// Count rows in a table. Used by tests to verify inserts landed.
    pub fn count_rows(&self, table: &str) -> Result<usize> {
        let mut stmt = self.conn.prepare(&format!("SELECT COUNT(*) FROM {table}"))?;
        let count: i64 = stmt.query_row([], |row| row.get(0))?;
        Ok(count as usize)
    }
}
