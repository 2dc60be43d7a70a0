//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use slcsp_cli::pipeline::{annotate, ingest, run_pipeline};
use slcsp_ingest::{IngestError, InputPaths, SkippedRows, read_csv_from};
use slcsp_model::MetalLevel;

const PLANS: &str = "\
plan_id,state,metal_level,rate,rate_area
P1,MO,Silver,30.00,3
P2,MO,Silver,20.00,3
P3,MO,Gold,1.00,3
P4,MO,Silver,25.00,3
P5,KS,Silver,212.35,6
P6,AR,Silver,40.00,2
P7,AR,Silver,40.00,2
P8,WV,Silver,271.64,9
P9,NY,Silver,245.125,1
P10,NY,Silver,240.00,1
";

const ZIPS: &str = "\
zipcode,state,county_code,name,rate_area
64148,MO,29095,Jackson,3
64148,MO,29047,Clay,3
67118,KS,20015,Butler,6
67118,KS,20191,Sumner,16
72001,AR,05105,Perry,2
25801,WV,54081,Raleigh,9
10001,NY,36061,New York,1
";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn fixture_paths(dir: &Path, targets: &str) -> InputPaths {
    InputPaths {
        targets: write_file(dir, "slcsp.csv", targets),
        plans: write_file(dir, "plans.csv", PLANS),
        zips: write_file(dir, "zips.csv", ZIPS),
    }
}

fn run_to_string(paths: &InputPaths) -> String {
    let mut out = Vec::new();
    run_pipeline(paths, MetalLevel::Silver, &mut out).expect("run pipeline");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn annotates_targets_in_input_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = fixture_paths(
        dir.path(),
        "zipcode,rate\n64148,\n67118,\n99999,\n72001,\n25801,\n10001,\n64148,\n",
    );
    insta::assert_snapshot!(run_to_string(&paths), @r"
    zipcode,rate
    64148,25.00
    67118,
    99999,
    72001,40.00
    25801,
    10001,245.12
    64148,25.00
    ");
}

#[test]
fn passthrough_columns_are_preserved_and_rate_appended() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = fixture_paths(dir.path(), "name,zipcode\n\"Kansas City, MO\",64148\n");
    assert_eq!(
        run_to_string(&paths),
        "name,zipcode,rate\n\"Kansas City, MO\",64148,25.00\n"
    );
}

#[test]
fn padded_passthrough_cells_are_written_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = fixture_paths(dir.path(), "zipcode,note,rate\n64148,\"  padded  \",\n");
    let out = run_to_string(&paths);
    let table = read_csv_from(out.as_bytes(), Path::new("out.csv")).expect("read output");
    assert_eq!(table.headers, vec!["zipcode", "note", "rate"]);
    assert_eq!(table.rows, vec![vec!["64148", "  padded  ", "25.00"]]);
}

#[test]
fn padded_zipcode_still_resolves() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = fixture_paths(dir.path(), "zipcode,rate\n 64148 ,\n");
    let out = run_to_string(&paths);
    let table = read_csv_from(out.as_bytes(), Path::new("out.csv")).expect("read output");
    assert_eq!(table.rows, vec![vec![" 64148 ", "25.00"]]);
}

#[test]
fn malformed_plan_row_is_skipped_without_touching_other_rates() {
    let dir = tempfile::tempdir().expect("temp dir");
    let plans = format!("{PLANS}C,TX,Gold,,7\n");
    let paths = InputPaths {
        targets: write_file(dir.path(), "slcsp.csv", "zipcode,rate\n64148,\n"),
        plans: write_file(dir.path(), "plans.csv", &plans),
        zips: write_file(dir.path(), "zips.csv", ZIPS),
    };
    assert_eq!(run_to_string(&paths), "zipcode,rate\n64148,25.00\n");

    let inputs = ingest(&paths).expect("ingest");
    let table = annotate(&inputs, MetalLevel::Silver);
    assert_eq!(table.skipped, SkippedRows { plans: 1, zips: 0 });
}

#[test]
fn stats_describe_every_outcome() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = fixture_paths(dir.path(), "zipcode\n64148\n67118\n99999\n25801\n");
    let inputs = ingest(&paths).expect("ingest");
    let table = annotate(&inputs, MetalLevel::Silver);
    assert_eq!(table.stats.rows, 4);
    assert_eq!(table.stats.resolved, 1);
    assert_eq!(table.stats.ambiguous, 1);
    assert_eq!(table.stats.no_rate_area, 1);
    assert_eq!(table.stats.insufficient, 1);
}

#[test]
fn all_empty_rates_still_succeed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = fixture_paths(dir.path(), "zipcode,rate\n00000,\n");
    assert_eq!(run_to_string(&paths), "zipcode,rate\n00000,\n");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = fixture_paths(dir.path(), "zipcode,rate\n64148,\n67118,\n10001,\n");
    assert_eq!(run_to_string(&paths), run_to_string(&paths));
}

#[test]
fn missing_input_fails_before_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut paths = fixture_paths(dir.path(), "zipcode,rate\n64148,\n");
    paths.zips = dir.path().join("absent.csv");
    let mut out = Vec::new();
    let err = run_pipeline(&paths, MetalLevel::Silver, &mut out).unwrap_err();
    let ingest_error = err.downcast_ref::<IngestError>().expect("ingest error");
    assert!(matches!(ingest_error, IngestError::InputNotFound { kind: "zips", .. }));
    assert!(err.to_string().contains("absent.csv"));
    assert!(out.is_empty());
}
