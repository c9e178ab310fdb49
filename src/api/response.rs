//! Response body classification for the payment API
//!
//! Classification happens in a fixed order: the "no data" sentinel first,
//! then a lexical JSON check, then the actual parse.

use serde_json::Value;

/// Plain-text body the API returns instead of an empty array when a query
/// matches nothing
pub const NO_DATA_SENTINEL: &str = "Pesquisa não retornou dados";

/// Number of characters of an unexpected body kept for logging
const PREVIEW_CHARS: usize = 200;

/// Shape of a response body after classification
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    /// Exact "no data" sentinel
    NoData,
    /// Body does not start with `[` or `{`
    NotJson,
    /// Looked like JSON but failed to parse
    Malformed(String),
    /// Parsed JSON array
    Array(Vec<Value>),
    /// Parsed JSON value that is not an array
    Other(Value),
}

/// Classify a raw response body
///
/// Surrounding whitespace is ignored; the sentinel match is otherwise exact.
pub fn classify_body(body: &str) -> BodyShape {
    let trimmed = body.trim();

    if trimmed == NO_DATA_SENTINEL {
        return BodyShape::NoData;
    }

    if !trimmed.starts_with('[') && !trimmed.starts_with('{') {
        return BodyShape::NotJson;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => BodyShape::Array(items),
        Ok(other) => BodyShape::Other(other),
        Err(e) => BodyShape::Malformed(e.to_string()),
    }
}

/// Human-readable name of a JSON value's type, for log messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First characters of a body, cut on a character boundary
pub fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}
