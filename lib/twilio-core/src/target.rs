//! Request target validation.
//!
//! A target is the base URL and the request path joined byte for byte. It is
//! validated as a whole and sent as written: dot segments, escapes and
//! trailing slashes are never rewritten.

use derive_more::{Display, Error};

/// Why a request target was rejected.
#[derive(Debug, Display, Error)]
pub enum InvalidTarget {
    /// A `%` not followed by two hex digits.
    #[display("invalid URL escape {_0:?}")]
    Escape(#[error(not(source))] String),

    /// Not a well-formed absolute URL (bad port, missing scheme...).
    #[display("{_0}")]
    Parse(url::ParseError),

    /// Not sendable as an HTTP request target (control characters, spaces...).
    #[display("{_0}")]
    Uri(http::uri::InvalidUri),
}

/// Validate a request target and convert it without altering it.
///
/// # Errors
///
/// Returns [`InvalidTarget`] for malformed percent escapes, for strings that
/// are not absolute URLs, and for characters not allowed on the wire.
///
/// # Example
///
/// ```
/// use twilio_core::parse_target;
///
/// let uri = parse_target("https://chat.twilio.com/v2/a/../Services").expect("valid target");
/// assert_eq!(uri, "https://chat.twilio.com/v2/a/../Services");
///
/// assert!(parse_target("https://chat.twilio.com/v2/get%2").is_err());
/// ```
pub fn parse_target(target: &str) -> Result<http::Uri, InvalidTarget> {
    check_escapes(target)?;
    url::Url::parse(target).map_err(InvalidTarget::Parse)?;
    target.parse().map_err(InvalidTarget::Uri)
}

fn check_escapes(target: &str) -> Result<(), InvalidTarget> {
    for (index, _) in target.match_indices('%') {
        let escape: String = target
            .get(index..)
            .unwrap_or_default()
            .chars()
            .take(3)
            .collect();
        let valid = escape.len() == 3 && escape.bytes().skip(1).all(|b| b.is_ascii_hexdigit());
        if !valid {
            return Err(InvalidTarget::Escape(escape));
        }
    }
    Ok(())
}
