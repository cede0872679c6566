//! Chat `Service` resource.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::{Context, HttpClient, Result, from_json, to_json};

// Encodes all except unreserved + sub-delims
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

const SERVICES_PATH: &str = "/Services";

/// A chat service, the top-level container of channels, users and roles.
///
/// Missing fields decode to their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Unique identifier, starting with `IS`.
    pub sid: String,
    /// Owning account.
    pub account_sid: String,
    /// Human-readable name.
    pub friendly_name: String,
    /// ISO 8601 creation date.
    pub date_created: Option<String>,
    /// ISO 8601 date of the last update.
    pub date_updated: Option<String>,
    /// Role given to new users.
    pub default_service_role_sid: Option<String>,
    /// Role given to users joining a channel.
    pub default_channel_role_sid: Option<String>,
    /// Role given to channel creators.
    pub default_channel_creator_role_sid: Option<String>,
    /// Message consumption horizon tracking.
    pub read_status_enabled: bool,
    /// User reachability indicators.
    pub reachability_enabled: bool,
    /// Seconds before a typing indicator expires.
    pub typing_indicator_timeout: u32,
    /// Seconds between consumption reports.
    pub consumption_report_interval: u32,
    /// Webhook called before an event is applied.
    pub pre_webhook_url: Option<String>,
    /// Webhook called after an event is applied.
    pub post_webhook_url: Option<String>,
    /// HTTP method of webhook calls.
    pub webhook_method: Option<String>,
    /// Events sent to the webhooks.
    pub webhook_filters: Vec<String>,
    /// Retries of the pre-event webhook.
    pub pre_webhook_retry_count: u32,
    /// Retries of the post-event webhook.
    pub post_webhook_retry_count: u32,
    /// Membership limits.
    pub limits: ServiceLimits,
    /// Absolute URL of the resource.
    pub url: String,
    /// Sub-resource URLs.
    pub links: ServiceLinks,
}

/// Per-service limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLimits {
    /// Maximum members per channel.
    pub channel_members: u32,
    /// Maximum channels per user.
    pub user_channels: u32,
}

/// Links to the service's sub-resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLinks {
    /// Channels of the service.
    pub channels: String,
    /// Users of the service.
    pub users: String,
    /// Roles of the service.
    pub roles: String,
    /// Push notification bindings.
    pub bindings: String,
}

/// Parameters of a create or update call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUpdateParams {
    /// Human-readable name of the service.
    pub friendly_name: String,
}

impl ServiceUpdateParams {
    /// Parameters setting the friendly name.
    #[must_use]
    pub fn new(friendly_name: impl Into<String>) -> Self {
        Self {
            friendly_name: friendly_name.into(),
        }
    }
}

/// CRUD operations on chat services.
///
/// # Example
///
/// ```ignore
/// use twilio::{ApiClient, Context};
/// use twilio::chat::{ServiceApi, ServiceUpdateParams};
///
/// let client = ApiClient::connect("AC123", "token", "https://chat.twilio.com/v2")?;
/// let services = ServiceApi::new(client);
///
/// let ctx = Context::background();
/// let created = services.create(&ctx, &ServiceUpdateParams::new("support")).await?;
/// let fetched = services.read(&ctx, &created.sid).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ServiceApi<C> {
    client: C,
}

impl<C> ServiceApi<C> {
    /// Create the service API over an HTTP client.
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient> ServiceApi<C> {
    /// Fetch a service by SID.
    ///
    /// # Errors
    ///
    /// Client errors are returned unchanged, so a missing service is
    /// [`Error::NotFound`](crate::Error::NotFound). An undecodable body is
    /// [`Error::Parse`](crate::Error::Parse).
    pub async fn read(&self, ctx: &Context, sid: &str) -> Result<Service> {
        let body = self.client.get(ctx, &service_path(sid)).await?;
        from_json(&body)
    }

    /// Create a service.
    ///
    /// # Errors
    ///
    /// Client errors are returned unchanged. An undecodable body is
    /// [`Error::Parse`](crate::Error::Parse).
    pub async fn create(&self, ctx: &Context, params: &ServiceUpdateParams) -> Result<Service> {
        let body = self.client.post(ctx, SERVICES_PATH, to_json(params)?).await?;
        from_json(&body)
    }

    /// Update a service.
    ///
    /// # Errors
    ///
    /// Client errors are returned unchanged. An undecodable body is
    /// [`Error::Parse`](crate::Error::Parse).
    pub async fn update(
        &self,
        ctx: &Context,
        sid: &str,
        params: &ServiceUpdateParams,
    ) -> Result<Service> {
        let body = self
            .client
            .post(ctx, &service_path(sid), to_json(params)?)
            .await?;
        from_json(&body)
    }

    /// Delete a service. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Client errors are returned unchanged.
    pub async fn delete(&self, ctx: &Context, sid: &str) -> Result<()> {
        self.client.delete(ctx, &service_path(sid)).await?;
        Ok(())
    }
}

fn service_path(sid: &str) -> String {
    format!(
        "{SERVICES_PATH}/{}",
        utf8_percent_encode(sid, PATH_SEGMENT_ENCODE_SET)
    )
}
