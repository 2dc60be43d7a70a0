//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or writing tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// One of the three input tables does not exist.
    #[error("{kind} file not found: {path}")]
    InputNotFound { kind: &'static str, path: PathBuf },

    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Malformed CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Failed to write output.
    #[error("failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    /// Failed to flush output.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    // === Record Errors ===
    /// Required column not found in a table.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Invalid value in a data row (1-based, header excluded).
    #[error("invalid {field} value '{value}' in {path} at row {row}")]
    InvalidValue {
        field: String,
        value: String,
        row: usize,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
