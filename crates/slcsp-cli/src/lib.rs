//! CLI library components for the SLCSP calculator.

pub mod logging;
pub mod pipeline;
