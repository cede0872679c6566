//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type declared on requests.
///
/// The API client sends `application/x-www-form-urlencoded` on every request,
/// whatever the body holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns [`crate::Error::Serialize`] if JSON serialization fails.
///
/// # Example
///
/// ```
/// use twilio_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Params { friendly_name: String }
///
/// let params = Params { friendly_name: "hello there".to_string() };
/// let bytes = to_json(&params).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"friendly_name":"hello there"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes, reporting the path of the failing field.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] if deserialization fails.
///
/// # Example
///
/// ```
/// use twilio_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Service { sid: String }
///
/// let service: Service = from_json(br#"{"sid":"IS1"}"#).expect("deserialize");
/// assert_eq!(service, Service { sid: "IS1".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::parse(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::Error;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Limits {
        channel_members: u32,
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Service {
        sid: String,
        limits: Limits,
    }

    #[test]
    fn content_type_as_str() {
        check!(ContentType::FormUrlEncoded.as_str() == "application/x-www-form-urlencoded");
    }

    #[test]
    fn to_json_serializes() {
        let service = Service {
            sid: "IS1".to_string(),
            limits: Limits {
                channel_members: 100,
            },
        };
        let_assert!(Ok(bytes) = to_json(&service));
        check!(bytes.as_ref() == br#"{"sid":"IS1","limits":{"channel_members":100}}"#);
    }

    #[test]
    fn from_json_deserializes() {
        let_assert!(
            Ok(service) =
                from_json::<Service>(br#"{"sid":"IS1","limits":{"channel_members":100}}"#)
        );
        check!(service.limits.channel_members == 100);
    }

    #[test]
    fn from_json_reports_path() {
        let result =
            from_json::<Service>(br#"{"sid":"IS1","limits":{"channel_members":"many"}}"#);

        let_assert!(Err(Error::Parse { path, message }) = result);
        check!(path == "limits.channel_members");
        check!(message.contains("invalid type"));
    }

    #[test]
    fn from_json_rejects_garbage() {
        let_assert!(Err(err) = from_json::<Service>(b"{invalid"));
        check!(err.is_parse());
    }
}
