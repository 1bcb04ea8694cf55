//! Decoder implementations
//!
//! Each decoder handles one input file format.

use super::types::RecordDecoder;
use crate::error::{Error, Result};
use serde_json::{Map, Value};

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder for arrays of flat objects
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }

    /// Extract records from a parsed JSON document.
    ///
    /// An array is taken as-is; a lone object becomes a single record,
    /// except when it has exactly one key holding an array, in which case
    /// that array is the record list (common API-export wrapper shape).
    fn extract_records(&self, value: Value) -> Vec<Value> {
        match value {
            Value::Array(arr) => arr,
            Value::Object(map) => {
                if map.len() == 1 {
                    if let Some(Value::Array(arr)) = map.values().next() {
                        return arr.clone();
                    }
                }
                vec![Value::Object(map)]
            }
            other => vec![other],
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::input(format!("Failed to parse JSON: {e}")))?;
        Ok(self.extract_records(value))
    }
}

// ============================================================================
// CSV Decoder
// ============================================================================

/// CSV decoder with configurable delimiter and header handling
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    /// Field delimiter
    delimiter: char,
    /// Whether the first row is a header
    has_header: bool,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

impl CsvDecoder {
    /// Create a new CSV decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV decoder with custom settings
    pub fn with_options(delimiter: char, has_header: bool) -> Self {
        Self {
            delimiter,
            has_header,
        }
    }
}

impl RecordDecoder for CsvDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let mut records = Vec::new();
        let mut lines = body.lines().peekable();

        // Get headers
        let headers: Vec<String> = if self.has_header {
            match lines.next() {
                Some(header_line) => parse_csv_line(header_line, self.delimiter),
                None => return Ok(records),
            }
        } else {
            // Generate numeric column names
            if let Some(first_line) = lines.peek() {
                let field_count = parse_csv_line(first_line, self.delimiter).len();
                (0..field_count).map(|i| format!("column_{i}")).collect()
            } else {
                return Ok(records);
            }
        };

        // Parse data rows
        for (line_num, line) in lines.enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields = parse_csv_line(line, self.delimiter);
            if fields.len() > headers.len() {
                return Err(Error::csv_parse(format!(
                    "row {} has {} fields, header has {}",
                    line_num + 2,
                    fields.len(),
                    headers.len()
                )));
            }

            let mut obj = Map::new();
            for (i, header) in headers.iter().enumerate() {
                let value = fields.get(i).cloned().unwrap_or_default();
                obj.insert(header.clone(), parse_csv_value(&value));
            }

            records.push(Value::Object(obj));
        }

        Ok(records)
    }
}

/// Parse a CSV line into fields, honoring quotes and `""` escapes
fn parse_csv_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                in_quotes = true;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(c);
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Parse a CSV cell into a JSON scalar
fn parse_csv_value(value: &str) -> Value {
    // Null/empty
    if value.is_empty() || value.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    // Try integer
    if let Ok(n) = value.parse::<i64>() {
        return Value::Number(n.into());
    }

    // Try float
    if let Ok(n) = value.parse::<f64>() {
        if let Some(num) = serde_json::Number::from_f64(n) {
            return Value::Number(num);
        }
    }

    // Try boolean
    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    // String
    Value::String(value.to_string())
}
