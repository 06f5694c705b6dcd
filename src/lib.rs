//! # brink
//!
//! Typed viewer-request hooks for CDN edge functions.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The edge platform owns TLS, caching, origin selection, and the request
//! lifecycle. brink does not. It owns the one step the platform delegates:
//! a synchronous transform that inspects a viewer request and either lets it
//! continue or answers it on the spot. Every feature brink skips is one the
//! platform already ships, tested at scale, at no cost to you.
//!
//! What the platform already owns — brink intentionally ignores:
//!
//! - **Transport** — TLS termination, HTTP parsing, connection handling
//! - **Routing** — which hook runs for which distribution and path pattern
//! - **Resilience** — retries, failover, turning hook failures into a 5xx
//! - **Observability infrastructure** — log shipping and metrics exporters
//!   (brink still emits [`tracing`] events; wiring a subscriber is the
//!   harness's call)
//!
//! What's left for brink — the only part that changes between deployments:
//!
//! - A typed event model — [`RequestEvent`] in, [`Outcome`] out, with
//!   headers and query string kept in document order
//! - Two ready-made hooks — [`hooks::strip_www`] and [`hooks::ack_post`]
//! - The JSON seam — [`dispatch`] parses, runs, and serializes in one call
//!
//! ## Quick start
//!
//! ```rust
//! use brink::{RequestEvent, hooks};
//!
//! let event = RequestEvent::from_json(r#"{
//!     "request": {
//!         "method": "GET",
//!         "uri": "/docs/",
//!         "headers": { "host": { "value": "www.example.com" } },
//!         "querystring": { "page": { "value": "2" } }
//!     }
//! }"#).unwrap();
//!
//! let outcome = hooks::strip_www(event).unwrap();
//! assert_eq!(
//!     outcome.to_json().unwrap(),
//!     r#"{"statusCode":301,"statusDescription":"Moved Permanently","headers":{"location":{"value":"https://example.com/docs/?page=2"}}}"#
//! );
//! ```

mod error;
mod event;
mod hook;
mod map;
mod outcome;
mod query;
mod response;
mod status;

pub mod hooks;

pub use error::Error;
pub use event::{HeaderValue, Headers, Request, RequestEvent};
pub use hook::{Hook, dispatch};
pub use map::OrderedMap;
pub use outcome::{IntoOutcome, Outcome};
pub use query::{QueryItem, QueryString, QueryValue};
pub use response::Response;
pub use status::Status;
