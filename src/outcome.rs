//! Hook outcome and the [`IntoOutcome`] conversion trait.

use serde::Serialize;

use crate::error::Error;
use crate::event::Request;
use crate::response::Response;
use crate::status::Status;

/// What a hook decided to do with the event.
///
/// The platform reads the decision from the shape of the returned document:
/// a request object means "continue toward the origin", a response object
/// means "answer the client now". `Outcome` serializes untagged to produce
/// exactly those two shapes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Continue normal processing with this (unchanged) request.
    Forward(Request),
    /// Short-circuit: respond to the client directly.
    Respond(Response),
}

impl Outcome {
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward(_))
    }

    pub fn is_respond(&self) -> bool {
        matches!(self, Self::Respond(_))
    }

    /// Serializes the outcome into the document handed back to the platform.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::from)
    }
}

/// Conversion into a hook [`Outcome`].
///
/// Lets a hook return whatever it naturally produces: a [`Request`] to
/// forward, a [`Response`] or bare [`Status`] to answer with, or an
/// [`Outcome`] when it branches between the two.
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

impl IntoOutcome for Request {
    fn into_outcome(self) -> Outcome {
        Outcome::Forward(self)
    }
}

impl IntoOutcome for Response {
    fn into_outcome(self) -> Outcome {
        Outcome::Respond(self)
    }
}

/// Answer with a bare status: `return Ok(Status::NoContent)`.
impl IntoOutcome for Status {
    fn into_outcome(self) -> Outcome {
        Outcome::Respond(Response::status(self))
    }
}
