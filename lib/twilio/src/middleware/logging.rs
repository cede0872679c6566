//! Request/response logging middleware.
//!
//! This middleware logs requests and responses using the `tracing` crate.

use std::time::Instant;

use tower::Layer;
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{BoxError, Request, RequestHandler, Response};

/// Layer that adds request/response logging to a [`RequestHandler`].
///
/// # Example
///
/// ```ignore
/// use twilio::{ApiClient, HyperHandler};
/// use twilio::middleware::LoggingLayer;
/// use tower::Layer;
///
/// let handler = LoggingLayer::new().layer(HyperHandler::new());
/// let client = ApiClient::new("AC123", "token", "https://chat.twilio.com/v2", handler)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Log level for the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (request/response details).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }
}

impl<H> Layer<H> for LoggingLayer {
    type Service = Logging<H>;

    fn layer(&self, inner: H) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Handler that logs requests and responses.
#[derive(Debug, Clone)]
pub struct Logging<H> {
    inner: H,
    level: LogLevel,
}

impl<H> Logging<H> {
    /// Create a new logging handler wrapping the given handler.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            level: LogLevel::Info,
        }
    }

    /// Log level in use.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Get a reference to the wrapped handler.
    #[must_use]
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: RequestHandler> RequestHandler for Logging<H> {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        let method = request.method();
        let uri = request.uri().to_string();
        let span = span!(Level::INFO, "http_request", %method, %uri);

        async move {
            let start = Instant::now();

            match self.level {
                // Headers are left out: they carry the credentials.
                LogLevel::Debug => {
                    debug!(
                        method = %method,
                        uri = %uri,
                        body_bytes = request.body().map_or(0, |body| body.len()),
                        "sending request"
                    );
                }
                LogLevel::Info => {
                    info!(method = %method, uri = %uri, "sending request");
                }
            }

            let result = self.inner.execute(request).await;

            // Saturating conversion to u64 (truncates after ~584 million years)
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) if response.is_success() => {
                    info!(status = response.status(), elapsed_ms, "request completed");
                }
                Ok(response) => {
                    warn!(
                        status = response.status(),
                        elapsed_ms,
                        "request completed with error status"
                    );
                }
                Err(err) => {
                    warn!(error = %err, elapsed_ms, "request failed");
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}
