//! HTTP status codes as a typed enum.
//!
//! A [`Status`] pairs the numeric code with the canonical reason phrase the
//! platform expects in `statusDescription`, so the two can never drift apart
//! in a hand-built response.
//!
//! ```rust
//! use brink::{Response, Status};
//!
//! let gone = Response::status(Status::Gone);
//! assert_eq!(gone.status_code, 410);
//! assert_eq!(gone.status_description, "Gone");
//! ```

/// The status codes an edge response plausibly carries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                  // 200
    Created,             // 201
    Accepted,            // 202
    NoContent,           // 204
    // ── 3xx Redirection ───────────────────────────────────────────────────────
    MovedPermanently,    // 301
    Found,               // 302
    SeeOther,            // 303
    NotModified,         // 304
    TemporaryRedirect,   // 307
    PermanentRedirect,   // 308
    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,          // 400
    Unauthorized,        // 401
    Forbidden,           // 403
    NotFound,            // 404
    MethodNotAllowed,    // 405
    Gone,                // 410
    TooManyRequests,     // 429
    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError, // 500
    NotImplemented,      // 501
    BadGateway,          // 502
    ServiceUnavailable,  // 503
    GatewayTimeout,      // 504
}

impl Status {
    /// Returns the numeric status code.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok                  => 200,
            Self::Created             => 201,
            Self::Accepted            => 202,
            Self::NoContent           => 204,
            Self::MovedPermanently    => 301,
            Self::Found               => 302,
            Self::SeeOther            => 303,
            Self::NotModified         => 304,
            Self::TemporaryRedirect   => 307,
            Self::PermanentRedirect   => 308,
            Self::BadRequest          => 400,
            Self::Unauthorized        => 401,
            Self::Forbidden           => 403,
            Self::NotFound            => 404,
            Self::MethodNotAllowed    => 405,
            Self::Gone                => 410,
            Self::TooManyRequests     => 429,
            Self::InternalServerError => 500,
            Self::NotImplemented      => 501,
            Self::BadGateway          => 502,
            Self::ServiceUnavailable  => 503,
            Self::GatewayTimeout      => 504,
        }
    }

    /// Returns the canonical reason phrase (e.g. `"No Content"`).
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok                  => "OK",
            Self::Created             => "Created",
            Self::Accepted            => "Accepted",
            Self::NoContent           => "No Content",
            Self::MovedPermanently    => "Moved Permanently",
            Self::Found               => "Found",
            Self::SeeOther            => "See Other",
            Self::NotModified         => "Not Modified",
            Self::TemporaryRedirect   => "Temporary Redirect",
            Self::PermanentRedirect   => "Permanent Redirect",
            Self::BadRequest          => "Bad Request",
            Self::Unauthorized        => "Unauthorized",
            Self::Forbidden           => "Forbidden",
            Self::NotFound            => "Not Found",
            Self::MethodNotAllowed    => "Method Not Allowed",
            Self::Gone                => "Gone",
            Self::TooManyRequests     => "Too Many Requests",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented      => "Not Implemented",
            Self::BadGateway          => "Bad Gateway",
            Self::ServiceUnavailable  => "Service Unavailable",
            Self::GatewayTimeout      => "Gateway Timeout",
        }
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> u16 {
        status.code()
    }
}
