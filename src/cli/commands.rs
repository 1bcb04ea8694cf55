//! CLI commands and argument parsing

use crate::decode::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// data2sql CLI
#[derive(Parser, Debug)]
#[command(name = "data2sql")]
#[command(author, version, about = "Convert JSON/CSV data to SQL tables", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JSON or CSV file to SQL statements
    Convert {
        /// Input JSON or CSV file
        #[arg(long)]
        file: PathBuf,

        /// Input file format (auto-detected from the extension if not specified)
        #[arg(long, value_enum)]
        format: Option<InputFormat>,

        /// Name of the SQL table to create
        #[arg(long)]
        table: String,

        /// Output file (.sql) or database URL (duckdb://file.db)
        #[arg(long)]
        output: Option<String>,

        /// Preview the inferred schema without generating output
        #[arg(long)]
        preview: bool,

        /// Interactively confirm or modify the schema
        #[arg(long)]
        interactive: bool,
    },
}
