//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, a body and a
//! [`Context`]. Header names are case-insensitive and hold a single value:
//! setting a header twice keeps the last value.
//!
//! # Example
//!
//! ```
//! use twilio_core::{Method, Request};
//!
//! let uri = "https://chat.twilio.com/v2/Services".parse().unwrap();
//! let request = Request::builder(Method::Get, uri)
//!     .header("Accept", "application/json")
//!     .build();
//!
//! assert_eq!(request.header("accept"), Some("application/json"));
//! assert_eq!(request.uri(), "https://chat.twilio.com/v2/Services");
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Context, Method};

/// An HTTP request with method, target URI, headers, optional body and context.
///
/// The URI is sent as given; see [`parse_target`](crate::parse_target).
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    uri: http::Uri,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
    context: Context,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, uri: http::Uri) -> RequestBuilder {
        RequestBuilder::new(method, uri)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request target.
    #[must_use]
    pub const fn uri(&self) -> &http::Uri {
        &self.uri
    }

    /// Request headers, keyed by lowercase name.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Context the request is bound to.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Consume into (method, uri, headers, body, context).
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Method,
        http::Uri,
        HashMap<String, String>,
        Option<Bytes>,
        Context,
    ) {
        (
            self.method,
            self.uri,
            self.headers,
            self.body,
            self.context,
        )
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    uri: http::Uri,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
    context: Context,
}

impl RequestBuilder {
    /// Creates a new builder bound to the background context.
    #[must_use]
    pub fn new(method: Method, uri: http::Uri) -> Self {
        Self {
            method,
            uri,
            headers: HashMap::new(),
            body: None,
            context: Context::background(),
        }
    }

    /// Sets a header, replacing any previous value.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Binds the request to a context.
    #[must_use]
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            uri: self.uri,
            headers: self.headers,
            body: self.body,
            context: self.context,
        }
    }
}
