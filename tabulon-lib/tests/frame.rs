//! Tests for frame and column construction.

use tabulon_lib::error::FrameError;
use tabulon_lib::model::{Column, Dtype, Frame, Scalar};

fn ints(values: &[i64]) -> Vec<Scalar> {
    values.iter().map(|v| Scalar::Int(*v)).collect()
}

#[test]
fn test_frame_dimensions() {
    let frame = Frame::new(vec![
        Column::new("a", ints(&[1, 2, 3])).unwrap(),
        Column::new("b", vec!["x".into(), "y".into(), "z".into()]).unwrap(),
    ])
    .unwrap();

    assert_eq!(frame.num_rows(), 3);
    assert_eq!(frame.num_cols(), 2);
    assert_eq!(frame.column_names(), vec!["a", "b"]);
}

#[test]
fn test_frame_rejects_length_mismatch() {
    let err = Frame::new(vec![
        Column::new("a", ints(&[1, 2, 3])).unwrap(),
        Column::new("b", ints(&[1, 2])).unwrap(),
    ])
    .unwrap_err();

    match err {
        FrameError::LengthMismatch {
            column,
            len,
            expected,
        } => {
            assert_eq!(column, "b");
            assert_eq!(len, 2);
            assert_eq!(expected, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_frame_is_valid() {
    let frame = Frame::empty();
    assert_eq!(frame.num_rows(), 0);
    assert_eq!(frame.num_cols(), 0);
}

#[test]
fn test_zero_row_frame_is_valid() {
    let frame = Frame::new(vec![Column::new("a", Vec::new()).unwrap()]).unwrap();
    assert_eq!(frame.num_rows(), 0);
    assert_eq!(frame.num_cols(), 1);
}

#[test]
fn test_head_truncates_and_preserves_order() {
    let frame = Frame::new(vec![Column::new("a", ints(&[10, 20, 30, 40])).unwrap()]).unwrap();
    let head = frame.head(2);

    assert_eq!(head.num_rows(), 2);
    assert_eq!(head.columns()[0].values(), &[Scalar::Int(10), Scalar::Int(20)]);
}

#[test]
fn test_head_clamps_to_row_count() {
    let frame = Frame::new(vec![Column::new("a", ints(&[1, 2])).unwrap()]).unwrap();
    assert_eq!(frame.head(100).num_rows(), 2);
}

#[test]
fn test_head_preserves_dtype_of_emptied_column() {
    let frame = Frame::new(vec![
        Column::new("score", vec![Scalar::Float(1.5), Scalar::Float(2.5)]).unwrap(),
    ])
    .unwrap();
    let head = frame.head(0);

    assert_eq!(head.num_rows(), 0);
    assert_eq!(head.columns()[0].dtype(), Dtype::Float);
}

#[test]
fn test_column_infers_int() {
    let column = Column::new("a", ints(&[1, 2])).unwrap();
    assert_eq!(column.dtype(), Dtype::Int);
}

#[test]
fn test_column_widens_mixed_numeric_to_float() {
    let column = Column::new("a", vec![Scalar::Int(1), Scalar::Float(2.5)]).unwrap();
    assert_eq!(column.dtype(), Dtype::Float);
    // The stored int is promoted, not just relabeled.
    assert_eq!(column.values()[0], Scalar::Float(1.0));
}

#[test]
fn test_column_allows_nulls() {
    let column = Column::new("a", vec![Scalar::Null, Scalar::Int(2)]).unwrap();
    assert_eq!(column.dtype(), Dtype::Int);
}

#[test]
fn test_column_rejects_mixed_types() {
    let err = Column::new("a", vec![Scalar::Int(1), Scalar::Str("x".into())]).unwrap_err();
    match err {
        FrameError::MixedColumn {
            column,
            first,
            second,
        } => {
            assert_eq!(column, "a");
            assert_eq!(first, "int64");
            assert_eq!(second, "str");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_all_null_column_defaults_to_str() {
    let column = Column::new("a", vec![Scalar::Null, Scalar::Null]).unwrap();
    assert_eq!(column.dtype(), Dtype::Str);
}

#[test]
fn test_column_with_explicit_dtype_rejects_mismatch() {
    let err = Column::with_dtype("a", Dtype::Bool, vec![Scalar::Int(1)]).unwrap_err();
    assert!(err.to_string().contains("bool"));
    assert!(err.to_string().contains("int64"));
}

#[test]
fn test_column_with_explicit_float_dtype_promotes_ints() {
    let column = Column::with_dtype("a", Dtype::Float, vec![Scalar::Int(3)]).unwrap();
    assert_eq!(column.values()[0], Scalar::Float(3.0));
}

#[test]
fn test_row_access_in_column_order() {
    let frame = Frame::new(vec![
        Column::new("a", ints(&[1, 2])).unwrap(),
        Column::new("b", vec!["x".into(), "y".into()]).unwrap(),
    ])
    .unwrap();

    let row = frame.row(1).unwrap();
    assert_eq!(row, vec![&Scalar::Int(2), &Scalar::Str("y".into())]);
    assert!(frame.row(2).is_none());
}
