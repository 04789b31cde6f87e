//! Error types

/// Errors raised while assembling a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Two outputs were registered under the same id.
    #[error("Duplicate output id '{id}'")]
    DuplicateOutput { id: String },
}

impl PageError {
    /// Creates a new duplicate output error.
    pub fn duplicate_output(id: impl Into<String>) -> Self {
        Self::DuplicateOutput { id: id.into() }
    }
}

/// Errors raised by the serving loop.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// Accepting a connection failed.
    #[error("Accept failed: {0}")]
    Accept(std::io::Error),
}
