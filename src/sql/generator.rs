//! CREATE TABLE and INSERT generation

use super::types::SqlValue;
use crate::error::{Error, Result};
use crate::schema::{SqlType, TableSchema};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

/// Check that a string is a valid SQL identifier
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// A record dropped during row coercion
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    /// Index of the record in the input order
    pub index: usize,
    /// Why the record was dropped
    pub reason: String,
}

/// Result of coercing records against a committed schema
#[derive(Debug, Clone, Default)]
pub struct CoercedRows {
    /// One value tuple per surviving record, in input order and schema field order
    pub rows: Vec<Vec<SqlValue>>,
    /// Records dropped because a value did not fit its committed type
    pub skipped: Vec<SkippedRecord>,
}

/// Render a CREATE TABLE statement for the schema.
///
/// NOT NULL is appended only for non-nullable columns. Fails when the table
/// name is not a valid SQL identifier.
pub fn render_create_table(table: &str, schema: &TableSchema) -> Result<String> {
    if !is_valid_identifier(table) {
        return Err(Error::InvalidTableName {
            name: table.to_string(),
        });
    }

    let columns: Vec<String> = schema
        .iter()
        .map(|field| {
            if field.nullable {
                format!("{} {}", field.name, field.sql_type)
            } else {
                format!("{} {} NOT NULL", field.name, field.sql_type)
            }
        })
        .collect();

    Ok(format!(
        "CREATE TABLE {} (\n    {}\n);",
        table,
        columns.join(",\n    ")
    ))
}

/// Coerce records into ordered value tuples matching the schema.
///
/// Records are processed in input order; a missing field yields NULL for
/// that position. A value incompatible with its committed type drops the
/// whole record into `skipped` and processing continues (batch
/// partial-success).
pub fn coerce_rows(schema: &TableSchema, records: &[Value]) -> CoercedRows {
    let mut out = CoercedRows::default();

    for (index, record) in records.iter().enumerate() {
        match coerce_record(schema, record) {
            Ok(row) => out.rows.push(row),
            Err(e) => {
                tracing::warn!(record = index, error = %e, "skipping record");
                out.skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    out
}

/// Coerce a single record into a schema-ordered value tuple
pub fn coerce_record(schema: &TableSchema, record: &Value) -> Result<Vec<SqlValue>> {
    let map = record
        .as_object()
        .ok_or_else(|| Error::validation("record is not a flat object"))?;

    schema
        .iter()
        .map(|field| match map.get(&field.source) {
            None | Some(Value::Null) => Ok(SqlValue::Null),
            Some(value) => coerce_value(&field.name, field.sql_type, value),
        })
        .collect()
}

/// Coerce one value to its column's committed type
fn coerce_value(field: &str, sql_type: SqlType, value: &Value) -> Result<SqlValue> {
    let fail = || Error::incompatible(field, sql_type, value);

    match sql_type {
        SqlType::Boolean => match value {
            Value::Bool(b) => Ok(SqlValue::Boolean(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(SqlValue::Boolean(false)),
                Some(1) => Ok(SqlValue::Boolean(true)),
                _ => Err(fail()),
            },
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(SqlValue::Boolean(true)),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(SqlValue::Boolean(false)),
            _ => Err(fail()),
        },
        SqlType::Integer => match value {
            Value::Bool(b) => Ok(SqlValue::Integer(i64::from(*b))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SqlValue::Integer(i))
                } else {
                    // Integral floats are fine, fractional ones are not
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 => Ok(SqlValue::Integer(f as i64)),
                        _ => Err(fail()),
                    }
                }
            }
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(SqlValue::Integer)
                .map_err(|_| fail()),
            _ => Err(fail()),
        },
        SqlType::Real => match value {
            Value::Number(n) => n.as_f64().map(SqlValue::Real).ok_or_else(fail),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(SqlValue::Real)
                .map_err(|_| fail()),
            _ => Err(fail()),
        },
        SqlType::Date => match value {
            Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map(SqlValue::Date)
                .map_err(|_| fail()),
            _ => Err(fail()),
        },
        SqlType::Text => match value {
            Value::String(s) => Ok(SqlValue::Text(s.clone())),
            Value::Bool(b) => Ok(SqlValue::Text(b.to_string())),
            Value::Number(n) => Ok(SqlValue::Text(n.to_string())),
            _ => Err(fail()),
        },
    }
}

/// Render one INSERT statement per coerced row, in schema field order
pub fn render_inserts(table: &str, schema: &TableSchema, rows: &[Vec<SqlValue>]) -> Vec<String> {
    let columns: Vec<&str> = schema.iter().map(|f| f.name.as_str()).collect();
    let column_list = columns.join(", ");

    rows.iter()
        .map(|row| {
            let values: Vec<String> = row.iter().map(SqlValue::to_literal).collect();
            format!(
                "INSERT INTO {} ({}) VALUES ({});",
                table,
                column_list,
                values.join(", ")
            )
        })
        .collect()
}
