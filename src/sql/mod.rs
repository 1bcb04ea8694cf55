//! SQL generation
//!
//! Renders a committed [`TableSchema`](crate::schema::TableSchema) into a
//! CREATE TABLE statement and records into INSERT statements or driver-ready
//! row tuples. Both output paths share one coercion step, so the values
//! produced never differ between them.

mod generator;
mod types;

pub use generator::{
    coerce_record, coerce_rows, is_valid_identifier, render_create_table, render_inserts,
    CoercedRows, SkippedRecord,
};
pub use types::SqlValue;

#[cfg(test)]
mod tests;
