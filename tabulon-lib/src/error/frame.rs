//! Frame construction and ingestion errors

/// Errors raised while building or loading a [`Frame`](crate::model::Frame).
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A column's length does not match the rest of the frame.
    #[error("Column '{column}' has {len} rows, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        column: String,
        /// The column's actual length.
        len: usize,
        /// The length established by the preceding columns.
        expected: usize,
    },

    /// A column holds values of more than one scalar type.
    #[error("Column '{column}' mixes {first} and {second} values")]
    MixedColumn {
        /// Name of the offending column.
        column: String,
        /// Type name of the value that established the column type.
        first: &'static str,
        /// Type name of the first value that contradicted it.
        second: &'static str,
    },

    /// The underlying CSV reader failed.
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

impl FrameError {
    /// Creates a new length mismatch error.
    pub fn length_mismatch(column: impl Into<String>, len: usize, expected: usize) -> Self {
        Self::LengthMismatch {
            column: column.into(),
            len,
            expected,
        }
    }

    /// Creates a new mixed column error.
    pub fn mixed_column(
        column: impl Into<String>,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::MixedColumn {
            column: column.into(),
            first,
            second,
        }
    }
}
