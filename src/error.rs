//! Unified error type.

use std::fmt;

/// The error type returned by brink's fallible operations.
///
/// Hook decisions (redirect, pass-through, direct response) are expressed as
/// [`Outcome`](crate::Outcome) values, not as `Error`s. This type surfaces
/// contract violations at the platform boundary: an event document that does
/// not parse, or a request missing the one header the built-in hooks read.
#[derive(Debug)]
pub enum Error {
    /// The event document could not be parsed, or an outcome could not be
    /// serialized back into one.
    Json(serde_json::Error),
    /// The request carried no `host` header.
    MissingHostHeader,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "event document: {e}"),
            Self::MissingHostHeader => f.write_str("request has no `host` header"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::MissingHostHeader => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
