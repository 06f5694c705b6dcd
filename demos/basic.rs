//! Minimal brink demo — run the built-in hooks over a viewer-request event.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!   cargo run --example basic -- '{"request":{"method":"POST","uri":"/", ...}}'
//!
//! Pass an event document as the first argument to try your own; without one
//! the sample below is used.

use brink::{Hook, dispatch, hooks};

const SAMPLE: &str = r#"{
    "request": {
        "method": "GET",
        "uri": "/blog/edge-functions",
        "headers": { "host": { "value": "www.example.com" } },
        "querystring": {
            "utm": { "value": "newsletter" },
            "draft": { "value": "" },
            "tag": { "multiValue": [{ "value": "rust" }, { "value": "edge" }] }
        }
    }
}"#;

fn main() {
    tracing_subscriber::fmt::init();

    let document = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_owned());

    let registry: [(&str, &dyn Hook); 2] = [
        ("strip-www", &hooks::strip_www),
        ("ack-post", &hooks::ack_post),
    ];

    for (name, hook) in registry {
        match dispatch(hook, &document) {
            Ok(outcome) => println!("{name}: {outcome}"),
            Err(err) => eprintln!("{name}: {err}"),
        }
    }
}
