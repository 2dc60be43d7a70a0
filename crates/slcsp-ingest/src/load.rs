use slcsp_model::{PlanRecord, TargetTable, ZipRateAreaRecord};
use tracing::info;

use crate::csv::read_csv_table;
use crate::error::Result;
use crate::paths::{InputPaths, ensure_inputs_exist};
use crate::records::{plan_records, target_table, zip_records};

/// Rows dropped from the reference tables because they could not be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkippedRows {
    pub plans: usize,
    pub zips: usize,
}

impl SkippedRows {
    pub fn total(&self) -> usize {
        self.plans + self.zips
    }
}

/// All three input tables, fully loaded.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub targets: TargetTable,
    pub plans: Vec<PlanRecord>,
    pub zips: Vec<ZipRateAreaRecord>,
    pub skipped: SkippedRows,
}

/// Validate every path up front, then read and type all three tables.
pub fn load_inputs(paths: &InputPaths) -> Result<LoadedInputs> {
    ensure_inputs_exist(paths)?;

    let targets = target_table(read_csv_table(&paths.targets)?, &paths.targets)?;
    let plans = plan_records(&read_csv_table(&paths.plans)?, &paths.plans)?;
    let zips = zip_records(&read_csv_table(&paths.zips)?, &paths.zips)?;
    let skipped = SkippedRows {
        plans: plans.skipped,
        zips: zips.skipped,
    };

    info!(
        targets = targets.len(),
        plans = plans.records.len(),
        zips = zips.records.len(),
        skipped_plans = skipped.plans,
        skipped_zips = skipped.zips,
        "inputs loaded"
    );
    Ok(LoadedInputs {
        targets,
        plans: plans.records,
        zips: zips.records,
        skipped,
    })
}
