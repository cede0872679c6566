//! HTTP client traits.
//!
//! - [`RequestHandler`] - Low-level transport executing a prepared request
//! - [`HttpClient`] - Authenticated `get`/`post`/`delete` against a base URL
//!
//! Resource services are written against [`HttpClient`]; the API client is
//! written against [`RequestHandler`]. Both are small enough to stub in tests.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Context, Request, Response, Result};

/// Boxed transport error, kept intact as the source of
/// [`Error::RequestFailed`](crate::Error::RequestFailed).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Transport abstraction.
///
/// Executes one prepared request and returns the buffered response, or the
/// reason no response could be obtained. Implementations must not retry and
/// must not interpret the status code.
pub trait RequestHandler: Send + Sync {
    /// Execute the request.
    ///
    /// # Errors
    ///
    /// Returns the underlying cause when no response was received
    /// (DNS, connection refused, TLS, broken connection...).
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = std::result::Result<Response, BoxError>> + Send;
}

impl<H: RequestHandler> RequestHandler for &H {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = std::result::Result<Response, BoxError>> + Send {
        (**self).execute(request)
    }
}

impl<H: RequestHandler> RequestHandler for Arc<H> {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = std::result::Result<Response, BoxError>> + Send {
        (**self).execute(request)
    }
}

/// REST client contract consumed by resource services.
///
/// Paths are relative to the client's base URL and must already be escaped.
/// Every call returns the raw response body of a successful (`200..400`)
/// response.
pub trait HttpClient: Send + Sync {
    /// Issue a GET request.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`] for the classification of failures.
    fn get(&self, ctx: &Context, path: &str) -> impl Future<Output = Result<Bytes>> + Send;

    /// Issue a POST request with the given body.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`] for the classification of failures.
    fn post(
        &self,
        ctx: &Context,
        path: &str,
        body: Bytes,
    ) -> impl Future<Output = Result<Bytes>> + Send;

    /// Issue a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`] for the classification of failures.
    fn delete(&self, ctx: &Context, path: &str) -> impl Future<Output = Result<Bytes>> + Send;
}

impl<C: HttpClient> HttpClient for Arc<C> {
    fn get(&self, ctx: &Context, path: &str) -> impl Future<Output = Result<Bytes>> + Send {
        (**self).get(ctx, path)
    }

    fn post(
        &self,
        ctx: &Context,
        path: &str,
        body: Bytes,
    ) -> impl Future<Output = Result<Bytes>> + Send {
        (**self).post(ctx, path, body)
    }

    fn delete(&self, ctx: &Context, path: &str) -> impl Future<Output = Result<Bytes>> + Send {
        (**self).delete(ctx, path)
    }
}
