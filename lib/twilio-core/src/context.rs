//! Per-call context: cancellation, deadline and caller values.
//!
//! A [`Context`] travels with every client call. The call is abandoned as
//! soon as the context is canceled or its deadline passes, and the caller
//! sees a transport failure whose source is an [`Interrupted`] value.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use twilio_core::Context;
//!
//! #[derive(Clone)]
//! struct RequestId(&'static str);
//!
//! let ctx = Context::background()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_value(RequestId("req-42"));
//!
//! assert_eq!(ctx.value::<RequestId>().map(|id| id.0), Some("req-42"));
//! assert!(ctx.deadline().is_some());
//! ```

use std::future::Future;
use std::time::Duration;

use derive_more::{Display, Error};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a call bound to a [`Context`] was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Interrupted {
    /// The context's cancellation token was triggered.
    #[display("context canceled")]
    Canceled,
    /// The context's deadline passed.
    #[display("context deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation, deadline and caller values for one call.
///
/// Cloning is cheap; clones share the same cancellation token.
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
    values: http::Extensions,
}

impl Context {
    /// A context that is never canceled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Bind the context to an existing cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |current| current.min(deadline)));
        self
    }

    /// Set a deadline relative to now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Attach a caller value, replacing any previous value of the same type.
    #[must_use]
    pub fn with_value<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.values.insert(value);
        self
    }

    /// Caller value of type `T`, if any.
    #[must_use]
    pub fn value<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.values.get::<T>()
    }

    /// Deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The cancellation token governing this context.
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Cancel this context and every clone of it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Why the context is done, or `None` while it is still live.
    #[must_use]
    pub fn err(&self) -> Option<Interrupted> {
        if self.token.is_cancelled() {
            return Some(Interrupted::Canceled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Some(Interrupted::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drive `future` until it completes or the context is done.
    ///
    /// The future is dropped when the context is canceled or the deadline
    /// passes. Cancellation wins over a deadline that elapses at the same
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when the context is done before the future.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Interrupted> {
        if let Some(reason) = self.err() {
            return Err(reason);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(Interrupted::Canceled),
            () = deadline => Err(Interrupted::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}
