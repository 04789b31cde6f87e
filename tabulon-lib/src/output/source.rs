//! Value sources

use std::future::Future;

use async_trait::async_trait;

use super::OutputValue;
use super::RenderContext;
use crate::error::RenderError;

/// The data-producing collaborator behind an output.
///
/// Resolved once per render cycle; the call may suspend (file IO, upstream
/// fetches). `None` means "nothing to render yet" and is not an error.
///
/// # Example
///
/// ```ignore
/// struct FixturesSource;
///
/// #[async_trait]
/// impl ValueSource for FixturesSource {
///     async fn resolve(
///         &self,
///         ctx: &RenderContext,
///     ) -> Result<Option<OutputValue>, RenderError> {
///         let n = ctx.inputs().get_usize("n")?;
///         let frame = Frame::from_csv("fixtures.csv")?;
///         Ok(Some(frame.head(n).into()))
///     }
/// }
/// ```
#[async_trait]
pub trait ValueSource: Send + Sync {
    /// Produces this cycle's value, or `None` when there is no data yet.
    async fn resolve(&self, ctx: &RenderContext) -> Result<Option<OutputValue>, RenderError>;
}

/// A [`ValueSource`] backed by an async closure. Built with [`source_fn`].
pub struct FnSource<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> ValueSource for FnSource<F>
where
    F: Fn(RenderContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<OutputValue>, RenderError>> + Send,
{
    async fn resolve(&self, ctx: &RenderContext) -> Result<Option<OutputValue>, RenderError> {
        (self.f)(ctx.clone()).await
    }
}

/// Lifts an async closure into a [`ValueSource`].
///
/// The closure receives its own copy of the [`RenderContext`] so the
/// returned future does not borrow from the call.
pub fn source_fn<F, Fut>(f: F) -> FnSource<F>
where
    F: Fn(RenderContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<OutputValue>, RenderError>> + Send,
{
    FnSource { f }
}
