//! Named, typed columns

use super::Dtype;
use super::Scalar;
use crate::error::FrameError;

/// A named column of homogeneously typed values.
///
/// Nulls are allowed anywhere. Integer values are accepted into a float
/// column and promoted, matching the usual widening of mixed numeric data;
/// any other mixture is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) dtype: Dtype,
    pub(crate) values: Vec<Scalar>,
}

impl Column {
    /// Creates a new column, inferring its dtype from the values.
    ///
    /// An empty or all-null column infers [`Dtype::Str`].
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::MixedColumn`] when the values span more than
    /// one scalar type (other than the int-into-float promotion).
    pub fn new(name: impl Into<String>, values: Vec<Scalar>) -> Result<Self, FrameError> {
        let name = name.into();
        let dtype = infer_dtype(&name, &values)?;
        Ok(Self {
            name,
            dtype,
            values: promote(dtype, values),
        })
    }

    /// Creates a new column with an explicit dtype.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::MixedColumn`] when a non-null value does not
    /// match `dtype` (integers are still promoted into float columns).
    pub fn with_dtype(
        name: impl Into<String>,
        dtype: Dtype,
        values: Vec<Scalar>,
    ) -> Result<Self, FrameError> {
        let name = name.into();
        for value in &values {
            match value.dtype() {
                None => {}
                Some(d) if d == dtype => {}
                Some(Dtype::Int) if dtype == Dtype::Float => {}
                Some(d) => {
                    return Err(FrameError::mixed_column(name, dtype.as_str(), d.as_str()));
                }
            }
        }
        Ok(Self {
            name,
            dtype,
            values: promote(dtype, values),
        })
    }

    /// Builds a column from parts the caller has already validated.
    pub(crate) fn from_parts(name: String, dtype: Dtype, values: Vec<Scalar>) -> Self {
        Self {
            name,
            dtype,
            values,
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column dtype.
    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    /// Returns the column values.
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Returns the number of values in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Infer the dtype of a value sequence, widening int to float.
fn infer_dtype(name: &str, values: &[Scalar]) -> Result<Dtype, FrameError> {
    let mut inferred: Option<Dtype> = None;
    for value in values {
        let Some(d) = value.dtype() else {
            continue;
        };
        inferred = match (inferred, d) {
            (None, d) => Some(d),
            (Some(current), d) if current == d => Some(current),
            (Some(Dtype::Int), Dtype::Float) | (Some(Dtype::Float), Dtype::Int) => {
                Some(Dtype::Float)
            }
            (Some(current), d) => {
                return Err(FrameError::mixed_column(name, current.as_str(), d.as_str()));
            }
        };
    }
    Ok(inferred.unwrap_or(Dtype::Str))
}

/// Rewrite stored ints as floats when the column dtype is float.
fn promote(dtype: Dtype, values: Vec<Scalar>) -> Vec<Scalar> {
    if dtype != Dtype::Float {
        return values;
    }
    values
        .into_iter()
        .map(|v| match v {
            Scalar::Int(i) => Scalar::Float(i as f64),
            other => other,
        })
        .collect()
}
