//! Render errors

use super::FrameError;
use super::InputError;

/// Errors raised while resolving and rendering an output.
///
/// `TypeMismatch` is the one error the table renderer itself produces; the
/// remaining variants carry failures out of the application's value
/// function so it can use `?` freely.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The resolved value is not a renderable dataset.
    #[error("Output type mismatch: expected {expected}, got {received}")]
    TypeMismatch {
        /// Type name the renderer expected.
        expected: &'static str,
        /// Type name of the value actually received.
        received: &'static str,
    },

    /// The value function itself failed.
    #[error("Value source failed: {0}")]
    Source(String),

    /// Frame construction or ingestion failed inside the value function.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// An input could not be read inside the value function.
    #[error(transparent)]
    Input(#[from] InputError),
}

impl RenderError {
    /// Creates a new source failure from an arbitrary message.
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }
}
