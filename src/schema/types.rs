//! Schema types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// SQL column type
///
/// Variants are ordered narrowest to widest; widening two types picks the
/// later one in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
    Boolean,
    Integer,
    Real,
    Date,
    Text,
}

impl SqlType {
    /// All recognized types, in widening order
    pub const ALL: [SqlType; 5] = [
        SqlType::Boolean,
        SqlType::Integer,
        SqlType::Real,
        SqlType::Date,
        SqlType::Text,
    ];

    /// Widen two types, returning the more general one
    pub fn widen(self, other: SqlType) -> SqlType {
        self.max(other)
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlType::Boolean => write!(f, "BOOLEAN"),
            SqlType::Integer => write!(f, "INTEGER"),
            SqlType::Real => write!(f, "REAL"),
            SqlType::Date => write!(f, "DATE"),
            SqlType::Text => write!(f, "TEXT"),
        }
    }
}

impl FromStr for SqlType {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BOOLEAN" => Ok(SqlType::Boolean),
            "INTEGER" => Ok(SqlType::Integer),
            "REAL" => Ok(SqlType::Real),
            "DATE" => Ok(SqlType::Date),
            "TEXT" => Ok(SqlType::Text),
            _ => Err(crate::error::Error::InteractiveInput {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Schema for a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Column name (sanitized for SQL)
    pub name: String,

    /// Field name as it appears in source records, used to look values up
    pub source: String,

    /// Column type
    #[serde(rename = "type")]
    pub sql_type: SqlType,

    /// Whether the column admits NULL
    pub nullable: bool,
}

impl FieldSchema {
    /// Create a field schema whose column name equals its source name
    pub fn new(name: impl Into<String>, sql_type: SqlType, nullable: bool) -> Self {
        let name = name.into();
        Self {
            source: name.clone(),
            name,
            sql_type,
            nullable,
        }
    }
}

/// Ordered table schema
///
/// Field order is first-seen order across the source records and is stable
/// for identical input. Column names are unique after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Columns, in first-seen order
    pub fields: Vec<FieldSchema>,
}

impl TableSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a field
    pub fn push(&mut self, field: FieldSchema) {
        self.fields.push(field);
    }

    /// Get a field by column name
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a mutable field by column name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldSchema> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Iterate fields in schema order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSchema> {
        self.fields.iter()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a TableSchema {
    type Item = &'a FieldSchema;
    type IntoIter = std::slice::Iter<'a, FieldSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Sanitize a field name into a SQL-safe column name.
///
/// Non-alphanumeric characters become underscores; names starting with a
/// digit get an `f_` prefix.
pub fn sanitize_field_name(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    if sanitized.is_empty() {
        sanitized.push('_');
    }
    if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        sanitized = format!("f_{sanitized}");
    }
    sanitized
}
