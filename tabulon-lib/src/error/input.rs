//! InputError for typed access to render inputs

/// Error type for input access on [`Inputs`](crate::output::Inputs).
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    /// The requested input was not present in the request.
    #[error("Input '{id}' not found in request")]
    Missing { id: String },

    /// The input exists but could not be parsed as the requested type.
    #[error("Input '{id}' has invalid value '{value}': expected {expected}")]
    Invalid {
        id: String,
        value: String,
        expected: &'static str,
    },
}

impl InputError {
    /// Creates a new missing input error.
    pub fn missing(id: impl Into<String>) -> Self {
        Self::Missing { id: id.into() }
    }

    /// Creates a new invalid input error.
    pub fn invalid(id: impl Into<String>, value: impl Into<String>, expected: &'static str) -> Self {
        Self::Invalid {
            id: id.into(),
            value: value.into(),
            expected,
        }
    }
}
