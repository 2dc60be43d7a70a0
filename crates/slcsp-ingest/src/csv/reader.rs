//! CSV file reading. The first non-blank row is the header.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A header-keyed table of string cells, kept as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of the header matching `name` once trimmed, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header.trim() == name)
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Read a CSV file into memory.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_csv_from(file, path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read csv"
    );
    Ok(table)
}

/// Read CSV from any reader; `path` is used for error messages only.
pub fn read_csv_from<R: Read>(reader: R, path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if headers.is_none()
            && let Some(first) = row.first_mut()
            && first.starts_with('\u{feff}')
        {
            *first = first.trim_start_matches('\u{feff}').to_string();
        }
        if is_blank(&row) {
            continue;
        }
        match &headers {
            None => headers = Some(row),
            Some(headers) => {
                let mut padded = Vec::with_capacity(headers.len().max(row.len()));
                padded.extend(row);
                if padded.len() < headers.len() {
                    padded.resize(headers.len(), String::new());
                }
                rows.push(padded);
            }
        }
    }
    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    Ok(CsvTable { headers, rows })
}
