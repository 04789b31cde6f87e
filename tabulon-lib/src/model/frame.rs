//! Rectangular frames

use super::Column;
use super::Scalar;
use crate::error::FrameError;

/// An in-memory rectangular dataset: ordered, named, typed columns of equal
/// length.
///
/// Column order is significant and preserved through every operation; the
/// payload built from a frame lists cells, names, and type hints in exactly
/// this order.
///
/// # Example
///
/// ```
/// use tabulon_lib::model::{Column, Frame, Scalar};
///
/// let frame = Frame::new(vec![
///     Column::new("name", vec!["a".into(), "b".into()]).unwrap(),
///     Column::new("count", vec![Scalar::Int(1), Scalar::Int(2)]).unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(frame.num_rows(), 2);
/// assert_eq!(frame.num_cols(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
    num_rows: usize,
}

impl Frame {
    /// Creates a new frame from columns.
    ///
    /// Zero columns and zero rows are both valid.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] naming the first column whose
    /// length differs from the columns before it.
    pub fn new(columns: Vec<Column>) -> Result<Self, FrameError> {
        let num_rows = columns.first().map(Column::len).unwrap_or(0);
        for column in &columns {
            if column.len() != num_rows {
                return Err(FrameError::length_mismatch(
                    column.name(),
                    column.len(),
                    num_rows,
                ));
            }
        }
        Ok(Self { columns, num_rows })
    }

    /// Creates a frame with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            num_rows: 0,
        }
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the columns in declared order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in declared order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Returns the column with the given name, if present.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Returns one row's cells in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Scalar>> {
        if index >= self.num_rows {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values()[index]).collect())
    }

    /// Returns a new frame holding the first `n` rows.
    ///
    /// `n` larger than the row count yields the whole frame; column dtypes
    /// are preserved even when the remaining values no longer witness them.
    pub fn head(&self, n: usize) -> Frame {
        let n = n.min(self.num_rows);
        let columns = self
            .columns
            .iter()
            .map(|c| {
                Column::from_parts(c.name().to_string(), c.dtype(), c.values()[..n].to_vec())
            })
            .collect();
        Self {
            columns,
            num_rows: n,
        }
    }
}
