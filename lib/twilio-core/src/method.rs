//! HTTP method types.

use derive_more::Display;

/// HTTP request method supported by the REST API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - read a resource.
    #[display("GET")]
    Get,
    /// POST method - create or update a resource.
    #[display("POST")]
    Post,
    /// DELETE method - remove a resource.
    #[display("DELETE")]
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Delete => Self::DELETE,
        }
    }
}
