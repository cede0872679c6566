//! Authenticated REST API client.
//!
//! [`ApiClient`] turns `get`/`post`/`delete` calls into prepared requests,
//! hands them to a [`RequestHandler`], and classifies the outcome:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | status `200..400` | `Ok(body)` |
//! | status `404` | [`Error::NotFound`] |
//! | any other status | [`Error::UnexpectedStatus`] |
//! | no response | [`Error::RequestFailed`] |
//! | bad target URL | [`Error::InvalidRequest`] (handler not called) |
//!
//! The target is `base_url + path`, joined and sent byte for byte.

use bytes::Bytes;
use url::Url;

use crate::{
    ClientConfig, ContentType, Context, Credentials, Error, HttpClient, HyperHandler, Method,
    Request, RequestHandler, Response, Result, header, parse_target,
};

/// REST API client over any [`RequestHandler`].
///
/// The base URL and credentials are fixed at construction; calls share no
/// mutable state, so the client is as thread-safe as its handler. Pass an
/// `Arc<H>` or `&H` to keep using the handler elsewhere.
///
/// # Example
///
/// ```ignore
/// use twilio::{ApiClient, Context, HttpClient};
///
/// let client = ApiClient::connect("AC123", "token", "https://chat.twilio.com/v2")?;
/// let body = client.get(&Context::background(), "/Services/IS123").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<H = HyperHandler> {
    handler: H,
    /// Validated base URL, as given (no trailing-slash normalization).
    base: String,
    base_url: Url,
    credentials: Credentials,
}

impl<H> ApiClient<H> {
    /// Create a client over the given handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is not an absolute URL.
    pub fn new(
        account_sid: impl AsRef<str>,
        auth_token: impl AsRef<str>,
        base_url: impl Into<String>,
        handler: H,
    ) -> Result<Self> {
        let base = base_url.into();
        let base_url = Url::parse(&base).map_err(Error::Config)?;

        Ok(Self {
            handler,
            base,
            base_url,
            credentials: Credentials::new(account_sid, auth_token),
        })
    }

    /// Base URL of the API.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Account SID used for authentication.
    #[must_use]
    pub fn account_sid(&self) -> &str {
        self.credentials.account_sid()
    }

    /// Get a reference to the request handler.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consume the client and return the request handler.
    #[must_use]
    pub fn into_handler(self) -> H {
        self.handler
    }
}

impl ApiClient<HyperHandler> {
    /// Create a client over a default [`HyperHandler`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is not an absolute URL.
    pub fn connect(
        account_sid: impl AsRef<str>,
        auth_token: impl AsRef<str>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Self::new(account_sid, auth_token, base_url, HyperHandler::new())
    }

    /// Create a builder for a client over a configured [`HyperHandler`].
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }
}

impl<H: RequestHandler> ApiClient<H> {
    async fn request(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<Bytes> {
        // Raw concatenation: the path must already be escaped.
        let target = format!("{}{path}", self.base);
        let uri = parse_target(&target).map_err(Error::InvalidRequest)?;

        let mut builder = Request::builder(method, uri)
            .header(header::AUTHORIZATION, self.credentials.authorization())
            .header(header::CONTENT_TYPE, ContentType::FormUrlEncoded.as_str())
            .context(ctx.clone());
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build();

        match ctx.run(self.handler.execute(request)).await {
            Ok(Ok(response)) => classify(response),
            Ok(Err(source)) => Err(Error::RequestFailed {
                url: target,
                source,
            }),
            Err(interrupted) => Err(Error::request_failed(target, interrupted)),
        }
    }
}

fn classify(response: Response) -> Result<Bytes> {
    if response.is_success() {
        Ok(response.into_body())
    } else if response.is_not_found() {
        Err(Error::NotFound)
    } else {
        Err(Error::UnexpectedStatus(response.status()))
    }
}

impl<H: RequestHandler> HttpClient for ApiClient<H> {
    async fn get(&self, ctx: &Context, path: &str) -> Result<Bytes> {
        self.request(ctx, Method::Get, path, None).await
    }

    async fn post(&self, ctx: &Context, path: &str, body: Bytes) -> Result<Bytes> {
        self.request(ctx, Method::Post, path, Some(body)).await
    }

    async fn delete(&self, ctx: &Context, path: &str) -> Result<Bytes> {
        self.request(ctx, Method::Delete, path, None).await
    }
}

/// Builder for an [`ApiClient`] over a configured [`HyperHandler`].
#[derive(Debug, Clone, Default)]
pub struct ApiClientBuilder {
    account_sid: String,
    auth_token: String,
    base_url: String,
    config: ClientConfig,
}

impl ApiClientBuilder {
    /// Set the account SID and auth token.
    #[must_use]
    pub fn credentials(
        mut self,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        self.account_sid = account_sid.into();
        self.auth_token = auth_token.into();
        self
    }

    /// Set the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the transport configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL is missing or not absolute.
    pub fn build(self) -> Result<ApiClient<HyperHandler>> {
        ApiClient::new(
            self.account_sid,
            self.auth_token,
            self.base_url,
            HyperHandler::with_config(self.config),
        )
    }
}
