//! Two-stage decoding of a tool call's `arguments` field.
//!
//! On the wire `arguments` is a JSON object serialized into a string.
//! Stage one pulls the string out unchanged; stage two parses it.

use serde_json::{Map, Value};

/// Stage one: read the `arguments` field of a function object as a plain
/// string.
///
/// Missing, null, or non-string values all yield `None`.
pub fn read_arguments_raw(function: &Map<String, Value>) -> Option<String> {
    function
        .get("arguments")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Stage two: parse a raw argument string as a JSON object.
///
/// Valid JSON that is not an object (`[]`, `"x"`, `3`) is an error.
pub fn parse_arguments(raw: &str) -> serde_json::Result<Map<String, Value>> {
    serde_json::from_str(raw)
}
