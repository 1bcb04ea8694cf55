//! Error types for data2sql
//!
//! This module defines the error hierarchy for the whole tool.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for data2sql
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors (file unreadable, unparseable, or empty)
    // ============================================================================
    #[error("Input error: {message}")]
    Input { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("CSV parsing error: {message}")]
    CsvParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Schema Errors (inference cannot proceed)
    // ============================================================================
    #[error("No records to infer a schema from")]
    EmptyDataset,

    #[error("Schema inference failed: {message}")]
    Schema { message: String },

    #[error("Field '{field}' collides with '{other}' after normalization")]
    FieldCollision { field: String, other: String },

    // ============================================================================
    // Validation Errors (bad table name, value/type mismatch)
    // ============================================================================
    #[error("Invalid table name: {name}. Table names must start with a letter or underscore and contain only letters, digits, and underscores")]
    InvalidTableName { name: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Value {value} for field '{field}' is not coercible to {sql_type}")]
    Incompatible {
        field: String,
        sql_type: String,
        value: String,
    },

    // ============================================================================
    // Interactive Errors
    // ============================================================================
    #[error("Unrecognized type '{input}'. Expected one of TEXT, INTEGER, REAL, DATE, BOOLEAN")]
    InteractiveInput { input: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create a CSV parse error
    pub fn csv_parse(message: impl Into<String>) -> Self {
        Self::CsvParse {
            message: message.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a value/type incompatibility error
    pub fn incompatible(
        field: impl Into<String>,
        sql_type: impl ToString,
        value: impl ToString,
    ) -> Self {
        Self::Incompatible {
            field: field.into(),
            sql_type: sql_type.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable within a run.
    ///
    /// Per-record value mismatches and bad interactive input are recovered
    /// (record skipped / user reprompted); everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Incompatible { .. } | Error::InteractiveInput { .. }
        )
    }
}

/// Result type alias for data2sql
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
