//! CSV ingestion with dtype inference

use std::path::Path;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use csv::ReaderBuilder;

use super::Column;
use super::Dtype;
use super::Frame;
use super::Scalar;
use crate::error::FrameError;

impl Frame {
    /// Loads a frame from a CSV file with a header row.
    ///
    /// Each column's dtype is inferred from its cells: integers widen to
    /// float when mixed with floats, and any other mixture falls back to a
    /// string column holding the raw cell text. Empty cells become nulls in
    /// every column.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Csv`] when the file cannot be opened or a
    /// record cannot be read (including ragged rows).
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Frame, FrameError> {
        let mut reader = ReaderBuilder::new().from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?);
        }

        let mut columns = Vec::with_capacity(headers.len());
        for (idx, name) in headers.into_iter().enumerate() {
            let raw: Vec<&str> = rows.iter().map(|r| r.get(idx).unwrap_or("")).collect();
            columns.push(build_column(name, &raw));
        }

        Frame::new(columns)
    }
}

/// Builds one typed column out of raw cell text.
fn build_column(name: String, raw: &[&str]) -> Column {
    let parsed: Vec<Scalar> = raw.iter().map(|s| parse_cell(s)).collect();

    let dtype = infer_dtype(&parsed);
    let values = match dtype {
        // String fallback keeps the raw cell text, not the partial parses.
        Dtype::Str => raw
            .iter()
            .zip(&parsed)
            .map(|(s, p)| {
                if p.is_null() {
                    Scalar::Null
                } else {
                    Scalar::Str((*s).to_string())
                }
            })
            .collect(),
        Dtype::Float => parsed
            .into_iter()
            .map(|v| match v {
                Scalar::Int(i) => Scalar::Float(i as f64),
                other => other,
            })
            .collect(),
        _ => parsed,
    };

    Column::from_parts(name, dtype, values)
}

/// Infers a column dtype from parsed cells, falling back to `Str` when the
/// cells do not agree (or are all null).
fn infer_dtype(parsed: &[Scalar]) -> Dtype {
    let mut inferred: Option<Dtype> = None;
    for value in parsed {
        let Some(d) = value.dtype() else {
            continue;
        };
        inferred = match (inferred, d) {
            (None, d) => Some(d),
            (Some(current), d) if current == d => Some(current),
            (Some(Dtype::Int), Dtype::Float) | (Some(Dtype::Float), Dtype::Int) => {
                Some(Dtype::Float)
            }
            (Some(_), _) => return Dtype::Str,
        };
    }
    inferred.unwrap_or(Dtype::Str)
}

/// Parses one raw cell into its most specific scalar form.
fn parse_cell(s: &str) -> Scalar {
    if s.is_empty() {
        return Scalar::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Scalar::Int(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Scalar::Float(f);
    }
    if s.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Scalar::DateTime(dt.with_timezone(&Utc));
    }
    // Bare dates are common in exports; midnight UTC keeps them sortable.
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = d.and_hms_opt(0, 0, 0) {
            return Scalar::DateTime(ndt.and_utc());
        }
    }
    Scalar::Str(s.to_string())
}
