//! Outgoing edge response and its builder.

use serde::Serialize;

use crate::event::{HeaderValue, Headers};
use crate::status::Status;

/// A response a hook hands back to the platform in place of origin
/// processing.
///
/// Serializes to the platform's shape: `statusCode`, `statusDescription`,
/// and `headers` only when at least one header is set.
///
/// # Shortcut (status only, no headers)
///
/// ```rust
/// use brink::{Response, Status};
///
/// Response::status(Status::NoContent);
/// ```
///
/// # Builder (headers, custom status)
///
/// ```rust
/// use brink::{Response, Status};
///
/// Response::builder()
///     .status(Status::MovedPermanently)
///     .header("location", "https://example.com/")
///     .finish();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub status_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
}

impl Response {
    /// Response with the given status and no headers.
    pub fn status(status: Status) -> Self {
        Self {
            status_code: status.code(),
            status_description: status.reason().to_owned(),
            headers: None,
        }
    }

    /// Builder for responses that carry headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: Status::Ok, headers: Headers::new() }
    }
}

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to [`Status::Ok`].
pub struct ResponseBuilder {
    status: Status,
    headers: Headers,
}

impl ResponseBuilder {
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, HeaderValue::new(value));
        self
    }

    pub fn finish(self) -> Response {
        let headers = if self.headers.is_empty() { None } else { Some(self.headers) };
        Response {
            status_code: self.status.code(),
            status_description: self.status.reason().to_owned(),
            headers,
        }
    }
}
