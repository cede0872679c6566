//! Basic authentication credentials.

use std::fmt;
use std::sync::Arc;

use base64::Engine;

/// Account SID and auth token used for HTTP Basic authentication.
///
/// The `Authorization` header value is computed once at construction.
#[derive(Clone)]
pub struct Credentials {
    account_sid: Arc<str>,
    /// `Basic base64(account_sid:auth_token)`.
    authorization: Arc<str>,
}

impl Credentials {
    /// Create credentials from an account SID and auth token.
    pub fn new(account_sid: impl AsRef<str>, auth_token: impl AsRef<str>) -> Self {
        let account_sid = account_sid.as_ref();
        let raw = format!("{account_sid}:{}", auth_token.as_ref());
        let encoded = base64::engine::general_purpose::STANDARD.encode(raw);
        Self {
            account_sid: Arc::from(account_sid),
            authorization: Arc::from(format!("Basic {encoded}")),
        }
    }

    /// The account SID.
    #[must_use]
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn encodes_basic_authorization() {
        // "acc:auth" -> "YWNjOmF1dGg="
        let credentials = Credentials::new("acc", "auth");
        check!(credentials.authorization() == "Basic YWNjOmF1dGg=");
        check!(credentials.account_sid() == "acc");
    }

    #[test]
    fn debug_hides_token() {
        let credentials = Credentials::new("AC123", "secret-token");
        let debug = format!("{credentials:?}");
        check!(debug.contains("AC123"));
        check!(!debug.contains("secret"));
        check!(!debug.contains(credentials.authorization()));
    }
}
