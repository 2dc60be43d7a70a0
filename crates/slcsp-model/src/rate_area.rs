use std::fmt;

use crate::error::{ModelError, Result};

/// A geographic pricing region, keyed by state and rate area number.
///
/// The area number alone is not unique across states. Both components are
/// held in their canonical string form: trimmed once here, then compared
/// verbatim, so `"1"` and `"01"` stay distinct.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RateArea {
    state: String,
    area: String,
}

impl RateArea {
    pub fn new(state: impl AsRef<str>, area: impl ToString) -> Self {
        Self {
            state: state.as_ref().trim().to_string(),
            area: area.to_string().trim().to_string(),
        }
    }

    /// Like [`RateArea::new`], but rejects empty components.
    pub fn try_new(state: impl AsRef<str>, area: impl ToString) -> Result<Self> {
        let rate_area = Self::new(state, area);
        if rate_area.state.is_empty() {
            return Err(ModelError::EmptyState);
        }
        if rate_area.area.is_empty() {
            return Err(ModelError::EmptyRateArea);
        }
        Ok(rate_area)
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn area(&self) -> &str {
        &self.area
    }
}

impl fmt::Display for RateArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.area)
    }
}
