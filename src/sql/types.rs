//! SQL value types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A value coerced to its column's committed SQL type.
///
/// The same rows back both output paths: rendered as literals for `.sql`
/// text, or bound as parameters for direct database insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Date(NaiveDate),
    Text(String),
}

impl SqlValue {
    /// Render as a SQL literal.
    ///
    /// TEXT and DATE are single-quoted with `''` escaping, BOOLEAN renders
    /// as 1/0, numerics are unquoted.
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Boolean(b) => if *b { "1" } else { "0" }.to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Real(f) => f.to_string(),
            SqlValue::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }

    /// Whether this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_literal())
    }
}
