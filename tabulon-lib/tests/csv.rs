//! Tests for CSV ingestion and dtype inference.

use std::fs;
use std::path::PathBuf;

use tabulon_lib::error::FrameError;
use tabulon_lib::model::{Dtype, Frame, Scalar};

fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tabulon-{}-{}.csv", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write temp csv");
    path
}

#[test]
fn test_from_csv_infers_column_types() {
    let path = write_temp_csv(
        "infer",
        "name,count,score,member,joined\n\
         ada,3,1.5,true,2021-03-04\n\
         grace,7,2.25,false,2022-11-30\n",
    );
    let frame = Frame::from_csv(&path).unwrap();

    assert_eq!(frame.num_rows(), 2);
    assert_eq!(
        frame.column_names(),
        vec!["name", "count", "score", "member", "joined"]
    );

    let dtypes: Vec<Dtype> = frame.columns().iter().map(|c| c.dtype()).collect();
    assert_eq!(
        dtypes,
        vec![
            Dtype::Str,
            Dtype::Int,
            Dtype::Float,
            Dtype::Bool,
            Dtype::DateTime
        ]
    );
}

#[test]
fn test_from_csv_widens_mixed_numeric_column() {
    let path = write_temp_csv("widen", "x\n1\n2.5\n");
    let frame = Frame::from_csv(&path).unwrap();

    assert_eq!(frame.columns()[0].dtype(), Dtype::Float);
    assert_eq!(frame.columns()[0].values()[0], Scalar::Float(1.0));
}

#[test]
fn test_from_csv_empty_cells_become_null() {
    let path = write_temp_csv("nulls", "x,y\n1,a\n,b\n3,\n");
    let frame = Frame::from_csv(&path).unwrap();

    assert_eq!(frame.columns()[0].dtype(), Dtype::Int);
    assert_eq!(frame.columns()[0].values()[1], Scalar::Null);
    assert_eq!(frame.columns()[1].values()[2], Scalar::Null);
}

#[test]
fn test_from_csv_conflicting_column_falls_back_to_raw_text() {
    let path = write_temp_csv("fallback", "x\n1\nnot a number\n");
    let frame = Frame::from_csv(&path).unwrap();

    assert_eq!(frame.columns()[0].dtype(), Dtype::Str);
    // The raw cell text survives, not the partial int parse.
    assert_eq!(frame.columns()[0].values()[0], Scalar::Str("1".into()));
    assert_eq!(
        frame.columns()[0].values()[1],
        Scalar::Str("not a number".into())
    );
}

#[test]
fn test_from_csv_header_only_file_yields_zero_rows() {
    let path = write_temp_csv("empty", "a,b\n");
    let frame = Frame::from_csv(&path).unwrap();

    assert_eq!(frame.num_rows(), 0);
    assert_eq!(frame.num_cols(), 2);
}

#[test]
fn test_from_csv_missing_file_is_csv_error() {
    let err = Frame::from_csv("/nonexistent/tabulon.csv").unwrap_err();
    assert!(matches!(err, FrameError::Csv(_)));
}

#[test]
fn test_from_csv_ragged_row_is_csv_error() {
    let path = write_temp_csv("ragged", "a,b\n1,2\n3\n");
    let err = Frame::from_csv(&path).unwrap_err();
    assert!(matches!(err, FrameError::Csv(_)));
}

#[test]
fn test_from_csv_then_head_matches_slider_usage() {
    let path = write_temp_csv(
        "head",
        "model,mpg\nMazda RX4,21\nDatsun 710,22.8\nValiant,18.1\n",
    );
    let frame = Frame::from_csv(&path).unwrap().head(2);

    assert_eq!(frame.num_rows(), 2);
    assert_eq!(frame.columns()[0].values()[1], Scalar::Str("Datsun 710".into()));
}
