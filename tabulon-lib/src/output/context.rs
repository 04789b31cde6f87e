//! Per-cycle render context and typed input access

use std::collections::HashMap;

use crate::error::InputError;

/// The input values of one render cycle, keyed by control id.
///
/// Built from the output request's query string; every value arrives as
/// text and the typed getters parse on access.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    values: HashMap<String, String>,
}

impl Inputs {
    /// Creates an empty input set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string (`n=5&mode=live`) into an input set.
    pub fn from_query(query: &str) -> Self {
        let values = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { values }
    }

    /// Sets an input value.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Returns the raw text of an input, if present.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Returns the raw text of an input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Missing`] when the input is absent.
    pub fn get_str(&self, id: &str) -> Result<&str, InputError> {
        self.get(id).ok_or_else(|| InputError::missing(id))
    }

    /// Returns an input parsed as `i64`.
    pub fn get_i64(&self, id: &str) -> Result<i64, InputError> {
        let raw = self.get_str(id)?;
        raw.parse()
            .map_err(|_| InputError::invalid(id, raw, "an integer"))
    }

    /// Returns an input parsed as `usize`.
    pub fn get_usize(&self, id: &str) -> Result<usize, InputError> {
        let raw = self.get_str(id)?;
        raw.parse()
            .map_err(|_| InputError::invalid(id, raw, "a non-negative integer"))
    }

    /// Returns an input parsed as `f64`.
    pub fn get_f64(&self, id: &str) -> Result<f64, InputError> {
        let raw = self.get_str(id)?;
        raw.parse()
            .map_err(|_| InputError::invalid(id, raw, "a number"))
    }

    /// Returns an input parsed as `bool` (`true`/`false`).
    pub fn get_bool(&self, id: &str) -> Result<bool, InputError> {
        let raw = self.get_str(id)?;
        raw.parse()
            .map_err(|_| InputError::invalid(id, raw, "true or false"))
    }
}

/// Everything a value function can see during one render cycle.
#[derive(Debug, Clone)]
pub struct RenderContext {
    output_id: String,
    inputs: Inputs,
}

impl RenderContext {
    /// Creates a context for the given output.
    pub fn new(output_id: impl Into<String>, inputs: Inputs) -> Self {
        Self {
            output_id: output_id.into(),
            inputs,
        }
    }

    /// Returns the id of the output being rendered.
    pub fn output_id(&self) -> &str {
        &self.output_id
    }

    /// Returns this cycle's inputs.
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }
}
