//! Programmable Chat resources.
//!
//! Resource services are thin: they build paths, encode JSON bodies and
//! decode JSON responses. Everything else (authentication, status handling,
//! cancellation) belongs to the [`HttpClient`](crate::HttpClient) they wrap.

mod service;

pub use service::{Service, ServiceApi, ServiceLimits, ServiceLinks, ServiceUpdateParams};
