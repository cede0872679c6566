//! Async client for the Twilio REST API.
//!
//! The [`ApiClient`] authenticates every request with the account SID and
//! auth token, sends it through a pluggable [`RequestHandler`], and maps the
//! response status to a body or an [`Error`]. Resource services such as
//! [`chat::ServiceApi`] are written against the [`HttpClient`] trait.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//!
//! use twilio::prelude::*;
//! use twilio::chat::ServiceApi;
//!
//! let client = ApiClient::connect("AC123", "token", "https://chat.twilio.com/v2")?;
//! let services = ServiceApi::new(client);
//!
//! let ctx = Context::background().with_timeout(Duration::from_secs(5));
//! match services.read(&ctx, "IS123").await {
//!     Ok(service) => println!("{}", service.friendly_name),
//!     Err(Error::NotFound) => println!("no such service"),
//!     Err(err) => return Err(err.into()),
//! }
//! ```

mod api_client;
pub mod chat;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;

// Re-export client types
pub use api_client::{ApiClient, ApiClientBuilder};
pub use client::HyperHandler;
pub use config::{ClientConfig, ClientConfigBuilder};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use twilio_core::{
    BoxError, ContentType, Context, Credentials, Error, HttpClient, Interrupted, InvalidTarget,
    Method, Request, RequestBuilder, RequestHandler, Response, Result, from_json, parse_target,
    to_json,
};

// Re-export http types for status codes and headers
pub use twilio_core::{StatusCode, header};

// Cancellation handle accepted by `Context::with_cancellation`
pub use tokio_util::sync::CancellationToken;
pub use url;
