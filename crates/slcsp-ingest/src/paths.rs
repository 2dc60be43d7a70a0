//! Input table locations and fail-fast existence checks.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

pub const DEFAULT_TARGETS_PATH: &str = "data/slcsp.csv";
pub const DEFAULT_PLANS_PATH: &str = "data/plans.csv";
pub const DEFAULT_ZIPS_PATH: &str = "data/zips.csv";

/// Paths to the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// Target ZIP list.
    pub targets: PathBuf,
    /// Plans table.
    pub plans: PathBuf,
    /// ZIP-to-rate-area table.
    pub zips: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            targets: PathBuf::from(DEFAULT_TARGETS_PATH),
            plans: PathBuf::from(DEFAULT_PLANS_PATH),
            zips: PathBuf::from(DEFAULT_ZIPS_PATH),
        }
    }
}

impl InputPaths {
    /// Fill any missing path with its default.
    pub fn from_optional(
        targets: Option<PathBuf>,
        plans: Option<PathBuf>,
        zips: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            targets: targets.unwrap_or(defaults.targets),
            plans: plans.unwrap_or(defaults.plans),
            zips: zips.unwrap_or(defaults.zips),
        }
    }

    fn labelled(&self) -> [(&'static str, &Path); 3] {
        [
            ("slcsp", self.targets.as_path()),
            ("plans", self.plans.as_path()),
            ("zips", self.zips.as_path()),
        ]
    }
}

/// Check that every input is a regular file before anything is read.
///
/// Paths are checked in order (targets, plans, zips); the first missing one
/// is reported.
pub fn ensure_inputs_exist(paths: &InputPaths) -> Result<()> {
    for (kind, path) in paths.labelled() {
        if !path.is_file() {
            return Err(IngestError::InputNotFound {
                kind,
                path: path.to_path_buf(),
            });
        }
        debug!(kind, path = %path.display(), "input found");
    }
    Ok(())
}
