use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::rate_area::RateArea;

/// Plan category by cost-sharing structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetalLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Catastrophic,
}

impl MetalLevel {
    /// The spelling used in plan tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetalLevel::Bronze => "Bronze",
            MetalLevel::Silver => "Silver",
            MetalLevel::Gold => "Gold",
            MetalLevel::Platinum => "Platinum",
            MetalLevel::Catastrophic => "Catastrophic",
        }
    }
}

impl fmt::Display for MetalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the plans table.
///
/// `metal_level` keeps the raw table value so tier filtering stays an exact
/// string comparison, including for tiers outside [`MetalLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub rate_area: RateArea,
    pub metal_level: String,
    pub rate: Decimal,
}

impl PlanRecord {
    pub fn new(rate_area: RateArea, metal_level: impl Into<String>, rate: Decimal) -> Self {
        Self {
            rate_area,
            metal_level: metal_level.into(),
            rate,
        }
    }
}

/// Parse a rate cell into an exact decimal.
pub fn parse_rate(raw: &str) -> Result<Decimal, ModelError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ModelError::InvalidRate(raw.to_string()))
}
