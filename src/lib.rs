// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # data2sql
//!
//! Infer a SQL table schema from a JSON or CSV data file and emit either a
//! SQL script or direct database rows.
//!
//! ## Features
//!
//! - **Schema Inference**: per-field SQL types and nullability from observed values
//! - **Type Widening**: conflicting observations merge to the more general type
//! - **Interactive Override**: confirm or correct the inferred schema per field
//! - **Two Sinks**: a `.sql` script or parameterized inserts into DuckDB
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use data2sql::decode::load_records;
//! use data2sql::schema::SchemaBuilder;
//! use data2sql::sql::{coerce_rows, render_create_table, render_inserts};
//!
//! fn main() -> data2sql::Result<()> {
//!     let records = load_records("players.json".as_ref(), None)?;
//!     let schema = SchemaBuilder::new().build(&records)?;
//!
//!     let create = render_create_table("players", &schema)?;
//!     let rows = coerce_rows(&schema, &records);
//!     let inserts = render_inserts("players", &schema, &rows.rows);
//!
//!     println!("{create}");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! raw file ──decode──▶ records ──infer──▶ TableSchema ──[edit]──▶ generator
//!                                                                   │
//!                                               .sql script ◀───────┴──────▶ DuckDB rows
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the tool
pub mod error;

/// Input decoders (JSON, CSV)
pub mod decode;

/// Schema inference
pub mod schema;

/// SQL generation
pub mod sql;

/// Interactive schema editing
pub mod editor;

/// Output sinks
pub mod output;

/// Direct database insertion via DuckDB
pub mod database;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use schema::{FieldSchema, SchemaBuilder, SqlType, TableSchema, TypeInferrer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
