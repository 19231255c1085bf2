//! HTTP client trait.
//!
//! [`HttpClient`] is the single seam between request construction and the
//! network. The production implementation lives in the `quill` crate;
//! tests substitute in-memory implementations to observe (or count)
//! dispatched requests.

use std::future::Future;

use crate::{Request, Response, Result};

/// A transport able to execute one HTTP request.
///
/// Implementations perform no retries and no caching: every call is a
/// fresh, independent request.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure (network, TLS). Responses
    /// with 4xx/5xx statuses are **not** errors at this layer; callers
    /// branch on [`Response::status`].
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}
