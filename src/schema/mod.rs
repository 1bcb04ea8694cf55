//! Schema inference
//!
//! Infers per-field SQL types and nullability from decoded records.
//!
//! # Features
//!
//! - **Type Inference**: ordered typed-parse attempts per value
//! - **Type Widening**: BOOLEAN < INTEGER < REAL < DATE < TEXT
//! - **Nullable Detection**: null or missing observations mark a field nullable
//! - **Stable Field Order**: columns appear in first-seen record order

mod inference;
mod types;

pub use inference::{is_date, SchemaBuilder, TypeInferrer};
pub use types::{sanitize_field_name, FieldSchema, SqlType, TableSchema};
