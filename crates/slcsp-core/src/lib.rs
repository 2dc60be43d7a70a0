//! Second-lowest-cost plan computation.
//!
//! Everything here is a pure function over loaded tables:
//!
//! - [`resolve_rate_areas`] maps a ZIP to its distinct rate areas
//! - [`filter_by_metal`] narrows plans to one tier
//! - [`rates_in_area`] collects a rate area's rates
//! - [`nth_lowest`] ranks them, counting duplicates
//! - [`benchmark_rate`] combines the last two at rank 2
//! - [`compute_rates`] drives all of it for a target list

pub mod benchmark;
pub mod compute;
pub mod lookup;
pub mod plan_filter;
pub mod resolver;
pub mod selector;

pub use benchmark::{BENCHMARK_RANK, benchmark_rate, format_rate};
pub use compute::{RunStats, compute_rates, compute_rates_for_zips, rate_for_zip};
pub use lookup::rates_in_area;
pub use plan_filter::filter_by_metal;
pub use resolver::resolve_rate_areas;
pub use selector::nth_lowest;
