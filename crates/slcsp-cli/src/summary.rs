use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

/// Print the run summary to stderr so stdout stays pure CSV.
pub fn print_summary(result: &RunResult) {
    eprintln!("Targets: {}", result.paths.targets.display());
    eprintln!("Plans: {}", result.paths.plans.display());
    eprintln!("Zips: {}", result.paths.zips.display());
    eprintln!("Metal level: {}", result.metal);
    if let Some(path) = &result.output {
        eprintln!("Output: {}", path.display());
    }

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("ZIPs")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("Rate found").fg(Color::Green),
        Cell::new(stats.resolved),
    ]);
    table.add_row(vec![
        Cell::new("No rate area"),
        count_cell(stats.no_rate_area),
    ]);
    table.add_row(vec![
        Cell::new("Multiple rate areas"),
        count_cell(stats.ambiguous),
    ]);
    table.add_row(vec![
        Cell::new("Fewer than two plans"),
        count_cell(stats.insufficient),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.rows).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");

    let skipped = &result.skipped;
    if skipped.total() > 0 {
        eprintln!(
            "Skipped malformed rows: {} plans, {} zips",
            skipped.plans, skipped.zips
        );
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).add_attribute(Attribute::Dim)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}
