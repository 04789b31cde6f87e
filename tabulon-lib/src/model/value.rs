//! Scalar cell values

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

use super::Dtype;

/// A dynamic value that can hold any cell type a frame supports.
///
/// # Example
///
/// ```
/// use tabulon_lib::model::Scalar;
///
/// let name = Scalar::from("Mazda RX4");
/// let mpg = Scalar::from(21.0);
/// let gears = Scalar::from(4i64);
/// let empty = Scalar::Null;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Str(String),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl Scalar {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns the type name of this value.
    ///
    /// Non-null names match the [`Dtype`] labels used as `type_hints`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => Dtype::Bool.as_str(),
            Scalar::Int(_) => Dtype::Int.as_str(),
            Scalar::Float(_) => Dtype::Float.as_str(),
            Scalar::Str(_) => Dtype::Str.as_str(),
            Scalar::DateTime(_) => Dtype::DateTime.as_str(),
        }
    }

    /// Returns the dtype of this value, or `None` for nulls.
    pub fn dtype(&self) -> Option<Dtype> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(_) => Some(Dtype::Bool),
            Scalar::Int(_) => Some(Dtype::Int),
            Scalar::Float(_) => Some(Dtype::Float),
            Scalar::Str(_) => Some(Dtype::Str),
            Scalar::DateTime(_) => Some(Dtype::DateTime),
        }
    }

    /// Projects this value into the JSON cell representation used on the
    /// wire.
    ///
    /// Integers and finite floats become numbers; non-finite floats have no
    /// JSON number form and become `null`. Datetimes become RFC 3339
    /// strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Scalar::Null => serde_json::Value::Null,
            Scalar::Bool(b) => serde_json::Value::Bool(*b),
            Scalar::Int(i) => serde_json::Value::from(*i),
            Scalar::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Scalar::Str(s) => serde_json::Value::String(s.clone()),
            Scalar::DateTime(dt) => {
                serde_json::Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::DateTime(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Scalar::Null,
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Null
    }
}
