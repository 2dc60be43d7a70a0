//! Table ingestion for SLCSP lookups.
//!
//! This crate locates, validates, and loads the three input tables (target
//! ZIP list, plans, ZIP-to-rate-area mapping) and writes the annotated
//! target list back out.
//!
//! # Features
//!
//! - **Fail-fast validation**: every input path is checked before any is read
//! - **CSV Loading**: header row required, cells kept verbatim, blank lines skipped
//! - **Typed records**: required columns checked, malformed rows skipped and counted
//!
//! # Example
//!
//! ```ignore
//! use slcsp_ingest::{InputPaths, load_inputs};
//!
//! let inputs = load_inputs(&InputPaths::default())?;
//! println!("{} target ZIPs", inputs.targets.len());
//! ```

mod csv;
mod error;
mod load;
mod paths;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading and Writing ===
pub use crate::csv::{CsvTable, read_csv_from, read_csv_table, write_csv_table};

// === Input Locations ===
pub use paths::{
    DEFAULT_PLANS_PATH, DEFAULT_TARGETS_PATH, DEFAULT_ZIPS_PATH, InputPaths, ensure_inputs_exist,
};

// === Records ===
pub use load::{LoadedInputs, SkippedRows, load_inputs};
pub use records::{Extracted, plan_records, target_table, zip_records};
