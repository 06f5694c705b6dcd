//! The viewer-request event and its request payload.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::map::OrderedMap;
use crate::query::QueryString;

/// Header names mapped to their values, in document order.
///
/// The platform lowercases header names before invoking a hook.
pub type Headers = OrderedMap<HeaderValue>;

/// A single header value.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HeaderValue {
    pub value: String,
}

impl HeaderValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// The event the platform hands a viewer-request hook: a wrapper around the
/// inbound [`Request`]. Sibling fields the platform places next to `request`
/// (version, context, viewer metadata) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestEvent {
    pub request: Request,
}

impl RequestEvent {
    /// Parses an event document as delivered by the platform.
    ///
    /// A document without `request`, `request.method`, or `request.uri` is a
    /// defined [`Error::Json`] failure, not a fault inside a hook.
    pub fn from_json(document: &str) -> Result<Self, Error> {
        serde_json::from_str(document).map_err(Error::from)
    }
}

/// The inbound client request as seen at the edge, before any origin.
///
/// Hooks never mutate a request. A pass-through moves the request out of the
/// event untouched; anything else is a freshly built
/// [`Response`](crate::Response).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Request {
    pub method: String,
    pub uri: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub querystring: QueryString,
}

impl Request {
    /// Returns a header value by its lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|h| h.value.as_str())
    }

    /// Returns the `host` header, the one header the built-in hooks read.
    pub fn host(&self) -> Result<&str, Error> {
        self.header("host").ok_or(Error::MissingHostHeader)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_a_full_event_document() {
        let event = RequestEvent::from_json(
            r#"{
                "version": "1.0",
                "request": {
                    "method": "GET",
                    "uri": "/index.html",
                    "headers": { "host": { "value": "example.com" } },
                    "querystring": {}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(event.request.method, "GET");
        assert_eq!(event.request.uri, "/index.html");
        assert_eq!(event.request.host().unwrap(), "example.com");
    }

    #[test]
    fn missing_method_is_a_parse_error() {
        let err = RequestEvent::from_json(r#"{"request": {"uri": "/"}}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_host_is_a_defined_failure() {
        let event = RequestEvent::from_json(
            r#"{"request": {"method": "GET", "uri": "/", "headers": {}, "querystring": {}}}"#,
        )
        .unwrap();
        assert!(matches!(event.request.host(), Err(Error::MissingHostHeader)));
    }

    #[test]
    fn header_lookup_is_exact_on_lowercase_names() {
        let event = RequestEvent::from_json(
            r#"{"request": {"method": "GET", "uri": "/", "headers": {"host": {"value": "example.com"}}}}"#,
        )
        .unwrap();
        assert_eq!(event.request.header("host"), Some("example.com"));
        assert_eq!(event.request.header("Host"), None);
    }
}
