//! Helpers for reading raw gateway events.

pub mod repr;

use serde_json::Value;

pub use repr::render;

/// Look up a query string parameter of a gateway request event.
pub fn query_param<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event
        .get("queryStringParameters")
        .and_then(|params| params.get(name))
        .and_then(Value::as_str)
}
