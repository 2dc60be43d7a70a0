//! Load, compute, and write stages of one SLCSP run.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use slcsp_core::{RunStats, compute_rates};
use slcsp_ingest::{InputPaths, LoadedInputs, SkippedRows, load_inputs, write_csv_table};
use slcsp_model::MetalLevel;

/// The annotated target table, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub stats: RunStats,
    /// Malformed reference rows left out of the computation.
    pub skipped: SkippedRows,
}

/// Stage 1: validate every input path, then load all three tables.
pub fn ingest(paths: &InputPaths) -> Result<LoadedInputs> {
    let span = info_span!(
        "ingest",
        targets = %paths.targets.display(),
        plans = %paths.plans.display(),
        zips = %paths.zips.display()
    );
    let _guard = span.enter();
    let start = Instant::now();
    let inputs = load_inputs(paths)?;
    info!(duration_ms = start.elapsed().as_millis(), "ingest complete");
    Ok(inputs)
}

/// Stage 2: compute one benchmark per target row and annotate the table.
pub fn annotate(inputs: &LoadedInputs, metal: MetalLevel) -> AnnotatedTable {
    let rates = compute_rates(&inputs.targets, &inputs.plans, &inputs.zips, metal);
    let stats = RunStats::from_rates(&rates);
    info!(
        resolved = stats.resolved,
        unresolved = stats.unresolved(),
        "benchmark rates computed"
    );
    let (headers, rows) = inputs.targets.with_rates(&rates);
    AnnotatedTable {
        headers,
        rows,
        stats,
        skipped: inputs.skipped,
    }
}

/// Stage 3: serialize the annotated table.
pub fn output<W: Write>(table: &AnnotatedTable, writer: W) -> Result<()> {
    write_csv_table(writer, &table.headers, &table.rows).context("write annotated table")
}

/// Run all stages, writing CSV to `writer`.
pub fn run_pipeline<W: Write>(
    paths: &InputPaths,
    metal: MetalLevel,
    writer: W,
) -> Result<RunStats> {
    let inputs = ingest(paths)?;
    let table = annotate(&inputs, metal);
    output(&table, writer)?;
    Ok(table.stats)
}
