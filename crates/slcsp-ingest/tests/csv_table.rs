use std::fs;
use std::path::{Path, PathBuf};

use slcsp_ingest::{IngestError, read_csv_from, read_csv_table, write_csv_table};

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_headers_and_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_file(dir.path(), "zips.csv", "zipcode,state,rate_area\n36749,AL,11\n");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["zipcode", "state", "rate_area"]);
    assert_eq!(table.rows, vec![vec!["36749", "AL", "11"]]);
    assert_eq!(table.column_index("rate_area"), Some(2));
    assert_eq!(table.column_index("county_code"), None);
}

#[test]
fn strips_bom_from_header_only_and_skips_blank_lines() {
    let contents = "\u{feff}zipcode , rate\n\n 64148 ,\n , \n67118,\u{feff}x\n";
    let table = read_csv_from(contents.as_bytes(), Path::new("slcsp.csv")).expect("read csv");
    assert_eq!(table.headers, vec!["zipcode ", " rate"]);
    assert_eq!(table.column_index("zipcode"), Some(0));
    assert_eq!(table.column_index("rate"), Some(1));
    assert_eq!(
        table.rows,
        vec![vec![" 64148 ", ""], vec!["67118", "\u{feff}x"]]
    );
}

#[test]
fn pads_short_rows() {
    let table =
        read_csv_from("a,b,c\n1\n".as_bytes(), Path::new("short.csv")).expect("read csv");
    assert_eq!(table.rows, vec![vec!["1", "", ""]]);
}

#[test]
fn empty_file_is_an_error() {
    let err = read_csv_from("\n\n".as_bytes(), Path::new("empty.csv")).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_csv_table(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}

#[test]
fn writes_header_then_rows() {
    let mut out = Vec::new();
    write_csv_table(
        &mut out,
        &["zipcode".to_string(), "rate".to_string()],
        &[
            vec!["64148".to_string(), "245.34".to_string()],
            vec!["40813".to_string(), String::new()],
        ],
    )
    .expect("write csv");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "zipcode,rate\n64148,245.34\n40813,\n"
    );
}

#[test]
fn writer_quotes_only_when_needed() {
    let mut out = Vec::new();
    write_csv_table(
        &mut out,
        &["zipcode".to_string(), "name".to_string()],
        &[vec!["10001".to_string(), "New York, NY".to_string()]],
    )
    .expect("write csv");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "zipcode,name\n10001,\"New York, NY\"\n"
    );
}
