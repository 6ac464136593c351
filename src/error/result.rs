//! Result type alias for Stride operations.

use super::context::ErrorContext;
use super::stride_error::StrideError;

/// Type alias for Results using StrideError.
pub type StrideResult<T> = Result<T, StrideError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use stride::error::{ErrorContext, ResultExt};
    ///
    /// let page = service
    ///     .fetch_feed(None, 20)
    ///     .await
    ///     .context(ErrorContext::new("initial_load"));
    /// ```
    fn context(self, ctx: ErrorContext) -> StrideResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> StrideResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> ResultExt<T> for StrideResult<T> {
    fn context(self, ctx: ErrorContext) -> StrideResult<T> {
        self.map_err(|e| e.with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> StrideResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
