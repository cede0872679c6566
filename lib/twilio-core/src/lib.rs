//! Core types and traits for the twilio REST API client.
//!
//! This crate provides the transport-agnostic building blocks:
//! - [`Method`] - HTTP methods used by the REST API
//! - [`Request`] and [`RequestBuilder`] - Prepared HTTP requests
//! - [`parse_target`] - Strict, non-rewriting validation of request URLs
//! - [`Response`] - Buffered HTTP response
//! - [`Context`] - Cancellation, deadline and caller values for one call
//! - [`RequestHandler`] - Transport abstraction executing a prepared request
//! - [`HttpClient`] - `get`/`post`/`delete` contract used by resource services
//! - [`Credentials`] - Account SID and auth token for Basic authentication
//! - [`Error`] and [`Result`] - Error handling
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod client;
mod context;
mod credentials;
mod error;
mod method;
pub mod prelude;
mod request;
mod response;
mod target;

pub use body::{ContentType, from_json, to_json};
pub use client::{BoxError, HttpClient, RequestHandler};
pub use context::{Context, Interrupted};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use target::{InvalidTarget, parse_target};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
