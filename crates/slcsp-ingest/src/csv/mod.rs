//! CSV reading and writing utilities.

mod reader;
mod writer;

pub use reader::{CsvTable, read_csv_from, read_csv_table};
pub use writer::write_csv_table;
