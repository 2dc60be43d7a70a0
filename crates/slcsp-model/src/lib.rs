//! Data model for second-lowest-cost Silver plan (SLCSP) lookups.

pub mod error;
pub mod outcome;
pub mod plan;
pub mod rate_area;
pub mod target;
pub mod zip;

pub use error::{ModelError, Result};
pub use outcome::{BenchmarkRate, UnresolvedReason};
pub use plan::{MetalLevel, PlanRecord, parse_rate};
pub use rate_area::RateArea;
pub use rust_decimal::Decimal;
pub use target::{RATE_COLUMN, TargetTable, ZIPCODE_COLUMN};
pub use zip::ZipRateAreaRecord;
