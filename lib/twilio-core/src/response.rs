//! HTTP response handling.
//!
//! [`Response`] is fully buffered: the transport reads the whole body before
//! handing the response over, so nothing is left to close afterwards.

use std::collections::HashMap;

use bytes::Bytes;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Status is in `200..400`, the range the API client accepts.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 400
    }

    /// Status is 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
