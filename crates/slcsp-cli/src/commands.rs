use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tracing::info;

use slcsp_cli::pipeline::{annotate, ingest, output};
use slcsp_ingest::InputPaths;
use slcsp_model::MetalLevel;

use crate::cli::Cli;
use crate::types::RunResult;

pub fn run_slcsp(cli: &Cli) -> Result<RunResult> {
    let paths = InputPaths::from_optional(cli.targets.clone(), cli.plans.clone(), cli.zips.clone());
    let metal = MetalLevel::from(cli.metal);

    let inputs = ingest(&paths)?;
    let table = annotate(&inputs, metal);

    // Output file is only created once all inputs loaded.
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file: {}", path.display()))?;
            output(&table, BufWriter::new(file))?;
        }
        None => output(&table, io::stdout().lock())?,
    }
    info!(
        rows = table.stats.rows,
        resolved = table.stats.resolved,
        unresolved = table.stats.unresolved(),
        skipped_rows = table.skipped.total(),
        "run complete"
    );

    Ok(RunResult {
        paths,
        metal,
        output: cli.output.clone(),
        stats: table.stats,
        skipped: table.skipped,
    })
}
