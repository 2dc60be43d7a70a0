use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a ZIP has no benchmark rate. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedReason {
    /// The ZIP is absent from the ZIP table.
    NoRateArea,
    /// The ZIP maps to more than one distinct rate area.
    AmbiguousRateArea { count: usize },
    /// The rate area offers fewer plans of the tier than the benchmark rank.
    InsufficientRates { available: usize },
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedReason::NoRateArea => f.write_str("no rate area"),
            UnresolvedReason::AmbiguousRateArea { count } => {
                write!(f, "ambiguous: {count} rate areas")
            }
            UnresolvedReason::InsufficientRates { available } => {
                write!(f, "insufficient rates: {available} available")
            }
        }
    }
}

/// Benchmark outcome for one target row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenchmarkRate {
    /// Rate formatted to exactly two decimal places.
    Rate(String),
    Unresolved(UnresolvedReason),
}

impl BenchmarkRate {
    pub fn rate(&self) -> Option<&str> {
        match self {
            BenchmarkRate::Rate(value) => Some(value),
            BenchmarkRate::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, BenchmarkRate::Rate(_))
    }

    /// The CSV cell value: the rate, or empty when unresolved.
    pub fn as_field(&self) -> &str {
        self.rate().unwrap_or("")
    }
}
