//! Query-string model and reassembly.
//!
//! The platform splits the query string into a map before invoking a hook.
//! Redirects need the original string back, so [`encode`] reassembles it
//! from the map, in document order, without touching the values: they arrive
//! already percent-encoded and must round-trip byte for byte.

use serde::{Deserialize, Serialize};

use crate::map::OrderedMap;

/// Query parameter names mapped to their values, in document order.
pub type QueryString = OrderedMap<QueryValue>;

/// One occurrence of a repeated query parameter.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QueryItem {
    pub value: String,
}

/// The value(s) of a single query parameter.
///
/// A parameter that appears once carries `value` alone; an empty `value`
/// means the parameter was given with no `=`, as in `?flag`. A repeated
/// parameter additionally carries every occurrence under `multi_value`, in
/// request order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryValue {
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_value: Option<Vec<QueryItem>>,
}

impl QueryValue {
    /// A parameter with a single value.
    pub fn single(value: impl Into<String>) -> Self {
        Self { value: value.into(), multi_value: None }
    }

    /// A parameter given with no value.
    pub fn flag() -> Self {
        Self::single("")
    }

    /// A repeated parameter, one item per occurrence.
    ///
    /// `value` mirrors the first occurrence, matching how the platform
    /// populates it.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<QueryItem> =
            values.into_iter().map(|v| QueryItem { value: v.into() }).collect();
        Self {
            value: items.first().map(|item| item.value.clone()).unwrap_or_default(),
            multi_value: Some(items),
        }
    }
}

/// Reassembles the query string the request arrived with.
///
/// Tokens appear in document order. A repeated parameter contributes one
/// `name=value` pair per occurrence, in sequence order; a bare flag
/// contributes its name alone. Values are concatenated verbatim, with no
/// additional escaping.
pub fn encode(querystring: &QueryString) -> String {
    let mut parts = Vec::with_capacity(querystring.len());

    for (param, query) in querystring.iter() {
        if let Some(items) = &query.multi_value {
            let group: Vec<String> =
                items.iter().map(|item| format!("{param}={}", item.value)).collect();
            parts.push(group.join("&"));
        } else if query.value.is_empty() {
            parts.push(param.to_owned());
        } else {
            parts.push(format!("{param}={}", query.value));
        }
    }

    parts.join("&")
}
