//! Schema inference from decoded records

use super::types::{sanitize_field_name, FieldSchema, SqlType, TableSchema};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// ISO-8601 date shape. Calendar validity is checked separately via chrono,
/// so "2023-13-40" stays TEXT.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Per-field type inferrer with configuration options
#[derive(Debug, Clone)]
pub struct TypeInferrer {
    /// Detect ISO-8601 dates in string values
    detect_dates: bool,
    /// Attempt typed parses (bool/int/float) on string values
    probe_strings: bool,
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInferrer {
    /// Create a new inferrer with default settings
    pub fn new() -> Self {
        Self {
            detect_dates: true,
            probe_strings: true,
        }
    }

    /// Enable/disable date detection
    #[must_use]
    pub fn with_date_detection(mut self, enabled: bool) -> Self {
        self.detect_dates = enabled;
        self
    }

    /// Enable/disable typed-parse probing of string values
    #[must_use]
    pub fn with_string_probing(mut self, enabled: bool) -> Self {
        self.probe_strings = enabled;
        self
    }

    /// Infer the narrowest common SQL type and nullability for one field.
    ///
    /// Each entry is the field's value in one record; `None` means the field
    /// was absent from that record. Nulls set nullability but are ignored for
    /// type widening. A field with no non-null observations defaults to TEXT.
    pub fn infer(&self, values: &[Option<&Value>]) -> (SqlType, bool) {
        let mut inferred: Option<SqlType> = None;
        let mut nullable = false;

        for value in values {
            match value {
                None | Some(Value::Null) => nullable = true,
                Some(v) => {
                    let t = self.infer_value(v);
                    inferred = Some(match inferred {
                        Some(prev) => prev.widen(t),
                        None => t,
                    });
                }
            }
        }

        (inferred.unwrap_or(SqlType::Text), nullable)
    }

    /// Infer the SQL type of a single non-null value
    pub fn infer_value(&self, value: &Value) -> SqlType {
        match value {
            Value::Bool(_) => SqlType::Boolean,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    SqlType::Integer
                } else {
                    SqlType::Real
                }
            }
            Value::String(s) => self.infer_string(s),
            // Nested arrays/objects have no scalar SQL mapping
            _ => SqlType::Text,
        }
    }

    /// Ordered typed-parse attempts for a string value.
    ///
    /// Numeric parses run before the date check, so an undashed numeric
    /// string like "20231001" infers INTEGER, not DATE.
    fn infer_string(&self, s: &str) -> SqlType {
        let trimmed = s.trim();

        if self.probe_strings {
            if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
                return SqlType::Boolean;
            }
            if trimmed.parse::<i64>().is_ok() {
                return SqlType::Integer;
            }
            if trimmed.parse::<f64>().is_ok() {
                return SqlType::Real;
            }
        }

        if self.detect_dates && is_date(trimmed) {
            return SqlType::Date;
        }

        SqlType::Text
    }
}

/// Check if a string is a dash-separated ISO-8601 calendar date
pub fn is_date(s: &str) -> bool {
    DATE_PATTERN.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Builds a [`TableSchema`] from decoded records
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    inferrer: TypeInferrer,
}

impl SchemaBuilder {
    /// Create a builder with default inference settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom inferrer
    pub fn with_inferrer(inferrer: TypeInferrer) -> Self {
        Self { inferrer }
    }

    /// Build a schema from records.
    ///
    /// Fields are discovered in first-seen order across all records; a record
    /// missing a field contributes a null observation for it. Fails on an
    /// empty record set, a non-object record, or two source fields that
    /// normalize to the same column name.
    pub fn build(&self, records: &[Value]) -> Result<TableSchema> {
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }

        // Discover field order
        let mut order: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (idx, record) in records.iter().enumerate() {
            let Value::Object(map) = record else {
                return Err(Error::schema(format!(
                    "record {idx} is not a flat object"
                )));
            };
            for key in map.keys() {
                if seen.insert(key.clone()) {
                    order.push(key.clone());
                }
            }
        }

        // Detect column-name collisions after normalization
        let mut normalized: HashMap<String, String> = HashMap::new();
        for source in &order {
            let column = sanitize_field_name(source);
            if let Some(other) = normalized.insert(column.to_lowercase(), source.clone()) {
                return Err(Error::FieldCollision {
                    field: source.clone(),
                    other,
                });
            }
        }

        // Infer each field over its observations
        let mut schema = TableSchema::new();
        for source in &order {
            let observations: Vec<Option<&Value>> = records
                .iter()
                .map(|record| record.as_object().and_then(|map| map.get(source)))
                .collect();

            let (sql_type, nullable) = self.inferrer.infer(&observations);
            tracing::debug!(field = %source, %sql_type, nullable, "inferred field");

            schema.push(FieldSchema {
                name: sanitize_field_name(source),
                source: source.clone(),
                sql_type,
                nullable,
            });
        }

        Ok(schema)
    }
}
