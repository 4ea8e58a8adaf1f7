//! Tests for the job id to salary index

use salprep::pipeline::KeyValueIndex;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_fixture_index() {
    let index = KeyValueIndex::build(salaries_rows(), true);

    // JOB1..JOB10 and JOB12; JOBX is malformed
    assert_eq!(index.len(), 11, "Header and malformed row should not be indexed");
    assert_eq!(index.malformed_rows(), 1);
    assert_eq!(index.lookup("JOB10"), Some(1000.0));
    assert_eq!(index.lookup("JOB12"), Some(0.0));
    assert_eq!(index.lookup("JOB11"), None);
    assert_eq!(index.lookup("JOBX"), None);
}

#[test]
fn test_duplicate_key_last_wins() {
    let rows = vec![
        vec!["jobId", "salary"],
        vec!["JOB1", "50000"],
        vec!["JOB1", "60000"],
    ];
    let index = KeyValueIndex::build(rows, true);

    assert_eq!(index.len(), 1);
    assert_eq!(index.lookup("JOB1"), Some(60000.0));
}

#[test]
fn test_malformed_rows_are_skipped_and_counted() {
    let rows = vec![
        vec!["jobId", "salary"],
        vec!["JOB1", "abc"],
        vec!["JOB2"],
        vec!["JOB3", ""],
        vec!["JOB4", "120"],
    ];
    let index = KeyValueIndex::build(rows, true);

    assert_eq!(index.len(), 1);
    assert_eq!(index.malformed_rows(), 3);
    assert_eq!(index.lookup("JOB4"), Some(120.0));
    assert_eq!(index.lookup("JOB1"), None);
}

#[test]
fn test_malformed_row_does_not_erase_earlier_value() {
    let rows = vec![vec!["JOB1", "75"], vec!["JOB1", "n/a"]];
    let index = KeyValueIndex::build(rows, false);

    assert_eq!(index.lookup("JOB1"), Some(75.0));
    assert_eq!(index.malformed_rows(), 1);
}

#[test]
fn test_extra_columns_are_ignored() {
    let rows = vec![vec!["JOB1", "88.5", "extra", "more"]];
    let index = KeyValueIndex::build(rows, false);

    assert_eq!(index.lookup("JOB1"), Some(88.5));
}

#[test]
fn test_empty_input() {
    let rows: Vec<Vec<String>> = Vec::new();
    let index = KeyValueIndex::build(rows, true);

    assert!(index.is_empty());
    assert_eq!(index.malformed_rows(), 0);
}
