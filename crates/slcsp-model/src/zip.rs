use serde::{Deserialize, Serialize};

use crate::rate_area::RateArea;

/// One row of the ZIP-to-rate-area table.
///
/// A ZIP that straddles counties appears once per county, so the same ZIP
/// may map to several rate areas or repeat the same one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRateAreaRecord {
    pub zipcode: String,
    pub rate_area: RateArea,
}

impl ZipRateAreaRecord {
    pub fn new(zipcode: impl AsRef<str>, rate_area: RateArea) -> Self {
        Self {
            zipcode: zipcode.as_ref().trim().to_string(),
            rate_area,
        }
    }
}
