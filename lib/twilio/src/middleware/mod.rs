//! Tower-style middleware for request handlers.
//!
//! Layers wrap any [`RequestHandler`](crate::RequestHandler) and produce a
//! new handler, so they compose with `tower::Layer` and `tower::ServiceBuilder`
//! style code. The [`ApiClient`](crate::ApiClient) itself logs nothing; wrap
//! its handler to get request summaries.
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use twilio::{ApiClient, HyperHandler};
//! use twilio::middleware::LoggingLayer;
//! use twilio::tower::Layer;
//!
//! let handler = LoggingLayer::debug().layer(HyperHandler::new());
//! let client = ApiClient::new("AC123", "token", "https://chat.twilio.com/v2", handler)?;
//! ```

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};
