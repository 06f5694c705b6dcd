//! Hook trait and the platform dispatch seam.
//!
//! # How plain functions become hooks
//!
//! A harness wants to hold several hooks in one collection and invoke them
//! uniformly, while hook authors want to write nothing but a function. The
//! bridge is a blanket impl: any `Fn(RequestEvent) -> Result<R, Error>`
//! where `R` converts into an [`Outcome`] satisfies [`Hook`], so a named
//! `fn`, a closure, or a capturing struct all coerce to `&dyn Hook` with no
//! registration ceremony:
//!
//! ```rust
//! use brink::{Hook, hooks};
//!
//! let registry: [(&str, &dyn Hook); 2] = [
//!     ("strip-www", &hooks::strip_www),
//!     ("ack-post",  &hooks::ack_post),
//! ];
//! # let _ = registry;
//! ```

use crate::error::Error;
use crate::event::RequestEvent;
use crate::outcome::{IntoOutcome, Outcome};

/// Implemented for every valid viewer-request hook.
///
/// You never implement this yourself. It is automatically satisfied for any
/// function or closure with the signature:
///
/// ```text
/// fn name(event: RequestEvent) -> Result<impl IntoOutcome, Error>
/// ```
///
/// The trait is **sealed** (via the private `Sealed` supertrait): only the
/// blanket impl below can satisfy it, which keeps the hook signature the
/// single definition of what a hook is.
pub trait Hook: private::Sealed + Send + Sync {
    /// Runs the hook on one event.
    fn handle(&self, event: RequestEvent) -> Result<Outcome, Error>;
}

/// The sealing module. Because `Sealed` is private, external crates cannot
/// name it and therefore cannot implement `Hook` on their own types.
mod private {
    pub trait Sealed {}
}

impl<F, R> private::Sealed for F
where
    F: Fn(RequestEvent) -> Result<R, Error> + Send + Sync,
    R: IntoOutcome,
{
}

impl<F, R> Hook for F
where
    F: Fn(RequestEvent) -> Result<R, Error> + Send + Sync,
    R: IntoOutcome,
{
    fn handle(&self, event: RequestEvent) -> Result<Outcome, Error> {
        (self)(event).map(IntoOutcome::into_outcome)
    }
}

/// The platform boundary: parse one event document, run one hook, serialize
/// the outcome.
///
/// This is the entire per-invocation path. An `Err` surfaces to the caller,
/// which on the real platform means the runtime's generic edge failure
/// response.
pub fn dispatch(hook: &dyn Hook, event_document: &str) -> Result<String, Error> {
    let event = RequestEvent::from_json(event_document)?;
    hook.handle(event)?.to_json()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hooks;
    use crate::response::Response;
    use crate::status::Status;

    const EVENT: &str = r#"{"request":{"method":"GET","uri":"/","headers":{"host":{"value":"example.com"}},"querystring":{}}}"#;

    #[test]
    fn closures_are_hooks() {
        let always_not_found = |_: RequestEvent| -> Result<Response, Error> {
            Ok(Response::status(Status::NotFound))
        };
        let out = dispatch(&always_not_found, EVENT).unwrap();
        assert_eq!(out, r#"{"statusCode":404,"statusDescription":"Not Found"}"#);
    }

    #[test]
    fn dispatch_round_trips_a_pass_through() {
        let out = dispatch(&hooks::strip_www, EVENT).unwrap();
        let event: serde_json::Value = serde_json::from_str(EVENT).unwrap();
        let out: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(out, event["request"]);
    }

    #[test]
    fn malformed_documents_are_json_errors() {
        let err = dispatch(&hooks::ack_post, "not an event").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
