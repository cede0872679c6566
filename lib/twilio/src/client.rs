//! Default transport using hyper-util.

use std::collections::HashMap;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::debug;

use crate::{BoxError, ClientConfig, Request, RequestHandler, Response, connector::https_connector};

/// Production [`RequestHandler`] with connection pooling and rustls TLS.
///
/// This is the transport used by [`ApiClient::connect`](crate::ApiClient::connect).
/// Cloning is cheap and clones share the connection pool.
///
/// # Example
///
/// ```ignore
/// use twilio::{ApiClient, HyperHandler};
///
/// let handler = HyperHandler::new();
/// let client = ApiClient::new("AC123", "token", "https://chat.twilio.com/v2", handler)?;
/// ```
#[derive(Clone)]
pub struct HyperHandler {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperHandler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperHandler {
    /// Create a handler with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a handler with custom configuration.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let connector = https_connector(&config);

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self { inner, config }
    }

    /// Get the handler configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a hyper request from a prepared request.
    ///
    /// The request's context travels in the `http` extensions.
    fn build_hyper_request(request: Request) -> Result<http::Request<Full<Bytes>>, http::Error> {
        let (method, uri, headers, body, context) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(uri)
            .extension(context);

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder.body(body.map_or_else(Full::default, Full::new))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }
}

impl Default for HyperHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHandler for HyperHandler {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        debug!(method = %request.method(), uri = %request.uri(), "sending request");
        let hyper_request = Self::build_hyper_request(request)?;

        let response = self.inner.request(hyper_request).await?;

        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        // Read to the end so the connection goes back to the pool.
        let body = response.into_body().collect().await?.to_bytes();

        debug!(status, bytes = body.len(), "response received");
        Ok(Response::new(status, headers, body))
    }
}
