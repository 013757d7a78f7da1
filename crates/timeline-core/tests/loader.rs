// File: crates/timeline-core/tests/loader.rs
// Purpose: CSV loading of the sample dataset and fail-fast error reporting.

mod common;

use common::{date, sample_csv_path};
use timeline_core::{load_csv, read_csv, Category, LoadError, RecordError};

#[test]
fn loads_sample_dataset() {
    let records = load_csv(sample_csv_path()).expect("sample csv loads");
    assert_eq!(records.len(), 24);
    let first = &records[0];
    assert_eq!(first.name, "Central/Eastern Drought/Heat Wave");
    assert_eq!(first.category, Category::DroughtWildfire);
    assert_eq!(first.cost, 40.1);
    assert_eq!(first.year, 1980);
    assert_eq!(first.mid, date(1980, 8, 31));
    assert!(records.iter().all(|r| (1980..=2017).contains(&r.year)));
}

#[test]
fn header_lookup_ignores_case_whitespace_and_order() {
    let csv = " Year ,COST,mid,Name,category,deaths\n1990,2.5,1990-03-04,Flood,flooding,3\n";
    let records = read_csv(csv.as_bytes()).expect("parses");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Flood");
    assert_eq!(records[0].cost, 2.5);
}

#[test]
fn missing_column_is_reported() {
    let csv = "name,category,cost,year\nA,flooding,1,1990\n";
    match read_csv(csv.as_bytes()) {
        Err(LoadError::MissingColumn(col)) => assert_eq!(col, "mid"),
        other => panic!("expected missing column, got {other:?}"),
    }
}

#[test]
fn bad_number_reports_row_and_field() {
    let csv = "name,category,cost,year,mid\nA,flooding,1,1990,1990-01-01\nB,flooding,lots,1991,1991-01-01\n";
    match read_csv(csv.as_bytes()) {
        Err(LoadError::InvalidNumber { row, field, value }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "cost");
            assert_eq!(value, "lots");
        }
        other => panic!("expected invalid number, got {other:?}"),
    }
}

#[test]
fn bad_date_and_unknown_category_fail() {
    let bad_date = "name,category,cost,year,mid\nA,flooding,1,1990,03/04/1990\n";
    assert!(matches!(read_csv(bad_date.as_bytes()), Err(LoadError::InvalidDate { row: 1, .. })));

    let bad_cat = "name,category,cost,year,mid\nA,earthquake,1,1990,1990-03-04\n";
    match read_csv(bad_cat.as_bytes()) {
        Err(LoadError::UnknownCategory { row, value }) => {
            assert_eq!(row, 1);
            assert_eq!(value, "earthquake");
        }
        other => panic!("expected unknown category, got {other:?}"),
    }
}

#[test]
fn negative_cost_is_rejected() {
    let csv = "name,category,cost,year,mid\nA,flooding,-3,1990,1990-03-04\n";
    match read_csv(csv.as_bytes()) {
        Err(LoadError::InvalidRecord { row, reason }) => {
            assert_eq!(row, 1);
            assert_eq!(reason, RecordError::InvalidCost(-3.0));
        }
        other => panic!("expected invalid record, got {other:?}"),
    }
}

#[test]
fn missing_file_names_the_path() {
    let err = load_csv("does/not/exist.csv").expect_err("missing file");
    assert!(err.to_string().contains("does/not/exist.csv"), "{err}");
}
