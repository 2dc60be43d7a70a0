use std::path::PathBuf;

use slcsp_core::RunStats;
use slcsp_ingest::{InputPaths, SkippedRows};
use slcsp_model::MetalLevel;

#[derive(Debug)]
pub struct RunResult {
    pub paths: InputPaths,
    pub metal: MetalLevel,
    pub output: Option<PathBuf>,
    pub stats: RunStats,
    pub skipped: SkippedRows,
}
