//! Tests for test features to ARFF conversion

use salprep::cli::{run_convert, validate_convert_paths};
use salprep::report::arff_header;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_convert_writes_header_and_placeholder_rows() {
    let dir = TempDir::new().unwrap();
    let contents = format!(
        "{}\nJOB1,COMP37,CFO,MASTERS,MATH,HEALTH,10,83\nJOB2,COMP19,CEO,HIGH_SCHOOL,NONE,WEB,3,73\n",
        FEATURES_HEADER
    );
    let input = write_file(dir.path(), "test_features.csv", &contents);
    let output = dir.path().join("test.arff");

    let written = run_convert(&input, &output).unwrap();
    assert_eq!(written, 2);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with(&arff_header()));
    let data: Vec<&str> = text[arff_header().len()..].lines().collect();
    assert_eq!(
        data,
        vec![
            "CFO,MASTERS,MATH,HEALTH,10,83,?",
            "CEO,HIGH_SCHOOL,NONE,WEB,3,73,?"
        ]
    );
}

#[test]
fn test_convert_header_only_input() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "empty.csv", &format!("{}\n", FEATURES_HEADER));
    let output = dir.path().join("empty.arff");

    assert_eq!(run_convert(&input, &output).unwrap(), 0);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), arff_header());
}

#[test]
fn test_convert_short_row_fails() {
    let dir = TempDir::new().unwrap();
    let contents = format!(
        "{}\nJOB1,COMP37,CFO,MASTERS,MATH,HEALTH,10,83\nJOB2,COMP19,CEO\n",
        FEATURES_HEADER
    );
    let input = write_file(dir.path(), "short.csv", &contents);
    let output = dir.path().join("short.arff");

    let err = run_convert(&input, &output).unwrap_err();
    assert!(
        format!("{:#}", err).contains("line 3"),
        "Error should point at the short row: {:#}",
        err
    );
}

#[test]
fn test_missing_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("out.arff");

    let err = validate_convert_paths(&input, &output).unwrap_err();
    assert!(err.to_string().contains("must be a valid readable file"));
    assert!(!output.exists(), "Nothing should be written on failure");
}

#[test]
fn test_directory_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.arff");

    let err = validate_convert_paths(dir.path(), &output).unwrap_err();
    assert!(err.to_string().contains("must be a valid readable file"));
}

#[test]
fn test_directory_output_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "in.csv", &format!("{}\n", FEATURES_HEADER));

    let err = validate_convert_paths(&input, dir.path()).unwrap_err();
    assert!(err.to_string().contains("must be a valid writable file"));
}
