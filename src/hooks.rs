//! Built-in viewer-request hooks.
//!
//! Two transforms cover most of what a viewer-request hook is asked to do in
//! front of a static site:
//!
//! | Hook | Trigger | Effect |
//! |---|---|---|
//! | [`strip_www`] | `host` starts with `www.` | 301 to the apex domain, path and query intact |
//! | [`ack_post`] | method is exactly `POST` | 204 No Content, nothing reaches the origin |
//!
//! Everything else passes through unchanged. Both hooks consume the event
//! and never mutate the request they forward.

use tracing::debug;

use crate::error::Error;
use crate::event::RequestEvent;
use crate::outcome::Outcome;
use crate::query;
use crate::response::Response;
use crate::status::Status;

/// Acknowledges `POST` requests at the edge with an empty `204 No Content`.
///
/// The method compare is exact: a lowercase `post` is not matched and the
/// request is forwarded untouched.
pub fn ack_post(event: RequestEvent) -> Result<Outcome, Error> {
    let request = event.request;

    if request.method == "POST" {
        debug!(uri = %request.uri, "answering POST at the edge");
        return Ok(Outcome::Respond(Response::status(Status::NoContent)));
    }

    Ok(Outcome::Forward(request))
}

/// Redirects `www.`-prefixed hosts to the apex domain.
///
/// `www.example.com/a/b?x=1` becomes a `301 Moved Permanently` pointing at
/// `https://example.com/a/b?x=1`; the path and query string survive byte for
/// byte. A host without the prefix passes through, so the hook is a no-op on
/// its own output.
pub fn strip_www(event: RequestEvent) -> Result<Outcome, Error> {
    let request = event.request;
    let host = request.host()?;

    if !host.starts_with("www.") {
        return Ok(Outcome::Forward(request));
    }

    let apex = &host[4..];
    let qstr = query::encode(&request.querystring);
    let location = if qstr.is_empty() {
        format!("https://{apex}{}", request.uri)
    } else {
        format!("https://{apex}{}?{qstr}", request.uri)
    };

    debug!(%location, "redirecting to the apex domain");

    let response = Response::builder()
        .status(Status::MovedPermanently)
        .header("location", &location)
        .finish();
    Ok(Outcome::Respond(response))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{HeaderValue, Headers, Request};
    use crate::query::{QueryString, QueryValue};

    fn event(method: &str, uri: &str, host: &str, query: &[(&str, QueryValue)]) -> RequestEvent {
        let mut headers = Headers::new();
        headers.insert("host", HeaderValue::new(host));
        let querystring: QueryString =
            query.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
        RequestEvent {
            request: Request {
                method: method.to_owned(),
                uri: uri.to_owned(),
                headers,
                querystring,
            },
        }
    }

    fn location(outcome: &Outcome) -> &str {
        match outcome {
            Outcome::Respond(res) => {
                &res.headers.as_ref().unwrap().get("location").unwrap().value
            }
            Outcome::Forward(_) => panic!("expected a response"),
        }
    }

    #[test]
    fn post_is_answered_with_an_empty_204() {
        let outcome = ack_post(event("POST", "/submit", "example.com", &[])).unwrap();
        assert_eq!(
            outcome.to_json().unwrap(),
            r#"{"statusCode":204,"statusDescription":"No Content"}"#
        );
    }

    #[test]
    fn other_methods_pass_through_unchanged() {
        for method in ["GET", "PUT", "DELETE", "post"] {
            let original = event(method, "/submit", "example.com", &[]);
            let expected = original.request.clone();
            let outcome = ack_post(original).unwrap();
            assert_eq!(outcome, Outcome::Forward(expected), "method {method}");
        }
    }

    #[test]
    fn bare_hosts_pass_through_unchanged() {
        let original = event("GET", "/path", "example.com", &[]);
        let expected = original.request.clone();
        let outcome = strip_www(original).unwrap();
        assert_eq!(outcome, Outcome::Forward(expected));
    }

    #[test]
    fn www_host_redirects_to_the_apex_domain() {
        let outcome = strip_www(event("GET", "/path", "www.example.com", &[])).unwrap();
        assert_eq!(location(&outcome), "https://example.com/path");
        assert_eq!(
            outcome.to_json().unwrap(),
            r#"{"statusCode":301,"statusDescription":"Moved Permanently","headers":{"location":{"value":"https://example.com/path"}}}"#
        );
    }

    #[test]
    fn query_string_survives_the_redirect() {
        let outcome = strip_www(event(
            "GET",
            "/",
            "www.example.com",
            &[("a", QueryValue::single("1")), ("flag", QueryValue::flag())],
        ))
        .unwrap();
        assert_eq!(location(&outcome), "https://example.com/?a=1&flag");
    }

    #[test]
    fn repeated_parameters_survive_the_redirect() {
        let outcome = strip_www(event(
            "GET",
            "/",
            "www.example.com",
            &[("tag", QueryValue::multi(["x", "y"]))],
        ))
        .unwrap();
        assert_eq!(location(&outcome), "https://example.com/?tag=x&tag=y");
    }

    #[test]
    fn the_redirect_target_passes_through_on_a_second_pass() {
        let outcome = strip_www(event("GET", "/path", "www.example.com", &[])).unwrap();
        assert!(outcome.is_respond());

        // The host the redirect points at no longer matches the prefix.
        let followup = event("GET", "/path", "example.com", &[]);
        assert!(strip_www(followup).unwrap().is_forward());
    }

    #[test]
    fn missing_host_is_a_defined_failure() {
        let mut stripped = event("GET", "/", "www.example.com", &[]);
        stripped.request.headers = Headers::new();
        assert!(matches!(strip_www(stripped), Err(Error::MissingHostHeader)));
    }
}
