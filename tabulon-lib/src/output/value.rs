//! Dynamic output values

use crate::model::Frame;
use crate::model::Scalar;

/// The dynamically typed value an application's value function may produce.
///
/// The table renderer only accepts the `Frame` variant; every other variant
/// exists so a wrong return value fails with an error naming what was
/// actually received instead of being coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    /// A rectangular dataset, the renderable case.
    Frame(Frame),
    /// A single scalar.
    Scalar(Scalar),
    /// A flat list of scalars.
    List(Vec<Scalar>),
    /// Arbitrary JSON.
    Json(serde_json::Value),
}

impl OutputValue {
    /// Returns the type name of this value, used verbatim in type-mismatch
    /// errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            OutputValue::Frame(_) => "frame",
            OutputValue::Scalar(_) => "scalar",
            OutputValue::List(_) => "list",
            OutputValue::Json(_) => "json",
        }
    }
}

impl From<Frame> for OutputValue {
    fn from(v: Frame) -> Self {
        OutputValue::Frame(v)
    }
}

impl From<Scalar> for OutputValue {
    fn from(v: Scalar) -> Self {
        OutputValue::Scalar(v)
    }
}

impl From<Vec<Scalar>> for OutputValue {
    fn from(v: Vec<Scalar>) -> Self {
        OutputValue::List(v)
    }
}

impl From<serde_json::Value> for OutputValue {
    fn from(v: serde_json::Value) -> Self {
        OutputValue::Json(v)
    }
}
