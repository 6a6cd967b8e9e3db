//! Tool call types

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::decode::parse_arguments;

/// A tool call requested by the model
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Position of the call; correlates streaming deltas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Tool type. Only `function` is used today.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<Function>,
}

/// The function the model wants invoked.
///
/// `arguments_raw` is the argument string exactly as sent. Send it back
/// unchanged when continuing the conversation; the model expects it.
/// `arguments` is the same string parsed into a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    #[serde(rename = "arguments", skip_serializing_if = "Option::is_none")]
    pub arguments_raw: Option<String>,
    #[serde(skip)]
    pub arguments: Option<Map<String, Value>>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments_raw: None,
            arguments: None,
        }
    }

    /// Attach a raw argument string, parsing it when it is a JSON object.
    ///
    /// A string that is not a JSON object is kept as-is; the encoded result
    /// only reads back with [`ArgumentsPolicy::Lenient`](crate::ArgumentsPolicy::Lenient).
    #[must_use]
    pub fn with_arguments_raw(mut self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        self.arguments = parse_arguments(&raw).ok();
        self.arguments_raw = Some(raw);
        self
    }

    /// Deserialize the raw arguments into a caller-chosen type.
    ///
    /// Returns `None` when the call carried no argument string.
    pub fn arguments_as<T: DeserializeOwned>(&self) -> Option<serde_json::Result<T>> {
        self.arguments_raw
            .as_deref()
            .map(serde_json::from_str)
    }
}
