//! Table payload rendering

use serde::Serialize;

use super::OutputValue;
use crate::error::RenderError;
use crate::model::Frame;

/// The JSON payload consumed by the Tabulator widget.
///
/// Serializes with exactly the keys `data`, `columns`, `type_hints`; this
/// is the wire contract and the client glue depends on it bit-exactly.
/// `data` is row-major with cells in the frame's column order, `columns`
/// the names in declared order, and `type_hints[i]` the dtype label of
/// `columns[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePayload {
    pub data: Vec<Vec<serde_json::Value>>,
    pub columns: Vec<String>,
    pub type_hints: Vec<String>,
}

impl TablePayload {
    /// Serializes a frame into the wire shape.
    pub fn from_frame(frame: &Frame) -> Self {
        let data = (0..frame.num_rows())
            .map(|row| {
                frame
                    .columns()
                    .iter()
                    .map(|c| c.values()[row].to_json())
                    .collect()
            })
            .collect();
        let columns = frame
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let type_hints = frame
            .columns()
            .iter()
            .map(|c| c.dtype().as_str().to_string())
            .collect();
        Self {
            data,
            columns,
            type_hints,
        }
    }
}

/// Converts one cycle's resolved value into a table payload.
///
/// - `None` produces no payload and no error: there is nothing to render
///   yet.
/// - A frame is serialized as-is; no filtering, coercion, or validation
///   happens here.
/// - Anything else fails with [`RenderError::TypeMismatch`] naming the
///   received type.
///
/// # Errors
///
/// Returns [`RenderError::TypeMismatch`] when the value is present but not
/// a frame.
pub fn render_table(value: Option<OutputValue>) -> Result<Option<TablePayload>, RenderError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value {
        OutputValue::Frame(frame) => Ok(Some(TablePayload::from_frame(&frame))),
        other => Err(RenderError::TypeMismatch {
            expected: "frame",
            received: other.type_name(),
        }),
    }
}
