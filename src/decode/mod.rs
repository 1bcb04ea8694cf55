//! Input decoders (JSON, CSV)
//!
//! Turns raw file contents into the flat record sequence the schema builder
//! consumes.

mod decoders;
mod types;

pub use decoders::{CsvDecoder, JsonDecoder};
pub use types::{InputFormat, RecordDecoder};

use crate::error::{Error, Result, ResultExt};
use serde_json::Value;
use std::path::Path;

/// Load records from a file, picking the decoder from the explicit format
/// or the file extension.
pub fn load_records(path: &Path, format: Option<InputFormat>) -> Result<Vec<Value>> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    tracing::debug!(path = %path.display(), %format, "loading records");

    let decoder: Box<dyn RecordDecoder> = match format {
        InputFormat::Json => Box::new(JsonDecoder::new()),
        InputFormat::Csv => Box::new(CsvDecoder::new()),
    };

    decoder.decode(&body)
}

#[cfg(test)]
mod tests;
