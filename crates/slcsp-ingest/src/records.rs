//! Typed record extraction from loaded CSV tables.
//!
//! A missing required column makes the whole table unusable and is an error.
//! A malformed row is skipped with a warning and counted; it never becomes
//! a zero rate and never affects other rows.

use std::path::Path;

use slcsp_model::{
    PlanRecord, RateArea, TargetTable, ZIPCODE_COLUMN, ZipRateAreaRecord, parse_rate,
};
use tracing::warn;

use crate::csv::CsvTable;
use crate::error::{IngestError, Result};

/// Records extracted from one table, plus how many rows were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

fn require_column(table: &CsvTable, column: &str, path: &Path) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })
}

/// Matching cells are compared trimmed.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("").trim()
}

fn invalid(field: &str, value: &str, row: usize, path: &Path) -> IngestError {
    IngestError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        row,
        path: path.to_path_buf(),
    }
}

fn rate_area_at(
    row: &[String],
    state_idx: usize,
    area_idx: usize,
    row_number: usize,
    path: &Path,
) -> Result<RateArea> {
    let state = cell(row, state_idx);
    let area = cell(row, area_idx);
    RateArea::try_new(state, area).map_err(|_| {
        if state.is_empty() {
            invalid("state", state, row_number, path)
        } else {
            invalid("rate_area", area, row_number, path)
        }
    })
}

/// Keep good rows; warn about and count the rest.
fn extract_rows<T, F>(table: &CsvTable, path: &Path, mut parse: F) -> Extracted<T>
where
    F: FnMut(&[String], usize) -> Result<T>,
{
    let mut records = Vec::with_capacity(table.rows.len());
    let mut skipped = 0usize;
    for (offset, row) in table.rows.iter().enumerate() {
        match parse(row, offset + 1) {
            Ok(record) => records.push(record),
            Err(error) => {
                skipped += 1;
                warn!(path = %path.display(), row = offset + 1, %error, "skipping malformed row");
            }
        }
    }
    if skipped > 0 {
        warn!(path = %path.display(), skipped, kept = records.len(), "malformed rows skipped");
    }
    Extracted { records, skipped }
}

/// Extract plans. Requires `state`, `rate_area`, `metal_level`, `rate`.
pub fn plan_records(table: &CsvTable, path: &Path) -> Result<Extracted<PlanRecord>> {
    let state_idx = require_column(table, "state", path)?;
    let area_idx = require_column(table, "rate_area", path)?;
    let metal_idx = require_column(table, "metal_level", path)?;
    let rate_idx = require_column(table, "rate", path)?;

    Ok(extract_rows(table, path, |row, row_number| {
        let rate_area = rate_area_at(row, state_idx, area_idx, row_number, path)?;
        let raw_rate = cell(row, rate_idx);
        let rate =
            parse_rate(raw_rate).map_err(|_| invalid("rate", raw_rate, row_number, path))?;
        Ok(PlanRecord::new(rate_area, cell(row, metal_idx), rate))
    }))
}

/// Extract ZIP mappings. Requires `zipcode`, `state`, `rate_area`.
pub fn zip_records(table: &CsvTable, path: &Path) -> Result<Extracted<ZipRateAreaRecord>> {
    let zip_idx = require_column(table, ZIPCODE_COLUMN, path)?;
    let state_idx = require_column(table, "state", path)?;
    let area_idx = require_column(table, "rate_area", path)?;

    Ok(extract_rows(table, path, |row, row_number| {
        let rate_area = rate_area_at(row, state_idx, area_idx, row_number, path)?;
        Ok(ZipRateAreaRecord::new(cell(row, zip_idx), rate_area))
    }))
}

/// Wrap the target list. Requires `zipcode`; other cells pass through as read.
pub fn target_table(table: CsvTable, path: &Path) -> Result<TargetTable> {
    TargetTable::new(table.headers, table.rows).ok_or_else(|| IngestError::MissingColumn {
        column: ZIPCODE_COLUMN.to_string(),
        path: path.to_path_buf(),
    })
}
