//! Error types for the twilio client.
//!
//! Every failure of a client call lands in exactly one [`Error`] variant:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Error::Config`] | the base URL does not parse (construction) |
//! | [`Error::InvalidRequest`] | the concatenated target URL is malformed |
//! | [`Error::RequestFailed`] | the transport failed, was canceled or timed out |
//! | [`Error::NotFound`] | the API answered `404` |
//! | [`Error::UnexpectedStatus`] | the API answered outside `200..400` (not `404`) |
//! | [`Error::Serialize`] | a resource payload could not be encoded |
//! | [`Error::Parse`] | a resource response could not be decoded |

use derive_more::{Display, Error, From};

use crate::{BoxError, Interrupted, InvalidTarget};

/// Main error type for twilio operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The base URL given at construction is not a valid absolute URL.
    #[display("could not parse url: {_0}")]
    #[from(skip)]
    Config(url::ParseError),

    /// The target URL (base URL + path) could not be parsed.
    ///
    /// The transport is never invoked when this is returned.
    #[display("could not create request: {_0}")]
    #[from(skip)]
    InvalidRequest(InvalidTarget),

    /// The transport did not produce a response.
    ///
    /// The original cause is kept as the error source.
    #[display("could not get a response for {url}: {source}")]
    #[from(skip)]
    RequestFailed {
        /// URL of the failing request.
        url: String,
        /// Transport error.
        source: BoxError,
    },

    /// The requested resource does not exist (HTTP 404).
    #[display("not found")]
    #[from(skip)]
    NotFound,

    /// The API answered with a status outside `200..400`, other than 404.
    #[display("unexpected status code: {_0}")]
    #[from(skip)]
    UnexpectedStatus(#[error(not(source))] u16),

    /// A request payload could not be encoded as JSON.
    #[display("could not encode request body: {_0}")]
    #[from]
    Serialize(serde_json::Error),

    /// A response payload could not be decoded.
    #[display("could not parse response at '{path}': {message}")]
    #[from(skip)]
    Parse {
        /// JSON path to the failing field (e.g. `limits.channel_members`).
        path: String,
        /// Decoder message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a transport failure for the given URL.
    #[must_use]
    pub fn request_failed(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::RequestFailed {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create a response decoding error.
    #[must_use]
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the API answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns `true` if the transport failed to produce a response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    /// Returns `true` if a response payload could not be decoded.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns the HTTP status code for status errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }

    /// Returns the context interruption behind a transport failure, if any.
    #[must_use]
    pub fn interrupted(&self) -> Option<&Interrupted> {
        match self {
            Self::RequestFailed { source, .. } => source.downcast_ref(),
            _ => None,
        }
    }
}
