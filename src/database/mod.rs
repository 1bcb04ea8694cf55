//! Direct database insertion via DuckDB

mod engine;

pub use engine::DatabaseSink;
