//! Decoder types and traits

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// CSV format
    Csv,
}

impl InputFormat {
    /// Detect the format from a file path's extension; anything that is not
    /// `.json` is treated as CSV.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Json => write!(f, "json"),
            InputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for decoding input file contents into records
pub trait RecordDecoder: Send + Sync {
    /// Decode the file contents into a list of flat records
    fn decode(&self, body: &str) -> Result<Vec<Value>>;
}
