//! Response decoder.
//!
//! Parses the payload into a [`serde_json::Value`] and walks it, mapping
//! wire keys onto the typed model. Only `choices`, `choices[].message` and
//! `tool_calls[].function.name` are required; every other field falls back
//! to `None` when missing or mistyped. A `tool_calls` element that is not an
//! object is skipped.

mod arguments;
mod fields;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{DecodeError, FieldPath, Result};
use crate::options::{ArgumentsPolicy, DecodeOptions};
use crate::telemetry;
use crate::types::{ChatCompletionResponse, Choice, Function, Message, ToolCall, Usage};

pub use arguments::{parse_arguments, read_arguments_raw};
use fields::{Fields, degraded};

/// Decode a response body from bytes with default options.
pub fn decode_slice(bytes: &[u8]) -> Result<ChatCompletionResponse> {
    Decoder::default().decode_slice(bytes)
}

/// Decode a response body from text with default options.
pub fn decode_str(text: &str) -> Result<ChatCompletionResponse> {
    Decoder::default().decode_str(text)
}

/// Decode an already-parsed JSON value with default options.
pub fn decode_value(value: &Value) -> Result<ChatCompletionResponse> {
    Decoder::default().decode_value(value)
}

/// Chat-completion decoder.
///
/// Stateless apart from its options; share or copy freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Options this decoder was built with.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Result<ChatCompletionResponse> {
        let result = serde_json::from_slice::<Value>(bytes)
            .map_err(DecodeError::from)
            .and_then(|value| self.decode_response(&value));
        record(result)
    }

    pub fn decode_str(&self, text: &str) -> Result<ChatCompletionResponse> {
        let result = serde_json::from_str::<Value>(text)
            .map_err(DecodeError::from)
            .and_then(|value| self.decode_response(&value));
        record(result)
    }

    pub fn decode_value(&self, value: &Value) -> Result<ChatCompletionResponse> {
        record(self.decode_response(value))
    }

    fn decode_response(&self, value: &Value) -> Result<ChatCompletionResponse> {
        let path = FieldPath::root();
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::structural(path.clone(), "object"))?;
        let fields = Fields::new(map, &path);

        let choices = fields
            .required_array("choices")?
            .iter()
            .enumerate()
            .map(|(i, choice)| self.decode_choice(choice, path.key("choices").index(i)))
            .collect::<Result<Vec<_>>>()?;

        let usage_path = path.key("usage");
        Ok(ChatCompletionResponse {
            choices,
            created: fields.i64("created"),
            id: fields.string("id"),
            model: fields.string("model"),
            provider: fields.string("provider"),
            usage: fields.object("usage").map(|usage| decode_usage(usage, &usage_path)),
        })
    }

    fn decode_choice(&self, value: &Value, path: FieldPath) -> Result<Choice> {
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::structural(path.clone(), "object"))?;
        let fields = Fields::new(map, &path);
        let message = fields.required_object("message")?;

        Ok(Choice {
            finish_reason: fields.string("finish_reason"),
            native_finish_reason: fields.string("native_finish_reason"),
            message: self.decode_message(message, path.key("message"))?,
        })
    }

    fn decode_message(&self, map: &Map<String, Value>, path: FieldPath) -> Result<Message> {
        let fields = Fields::new(map, &path);
        let tool_calls = fields
            .array("tool_calls")
            .map(|calls| {
                calls
                    .iter()
                    .enumerate()
                    .filter_map(|(i, call)| {
                        let call_path = path.key("tool_calls").index(i);
                        match call {
                            Value::Object(map) => Some(self.decode_tool_call(map, call_path)),
                            Value::Null => None,
                            _ => {
                                degraded(&call_path, "tool_calls");
                                None
                            }
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        Ok(Message {
            content: fields.string("content"),
            reasoning: fields.string("reasoning"),
            role: fields.string("role"),
            tool_calls,
        })
    }

    fn decode_tool_call(&self, map: &Map<String, Value>, path: FieldPath) -> Result<ToolCall> {
        let fields = Fields::new(map, &path);
        let function = fields
            .object("function")
            .map(|function| self.decode_function(function, path.key("function")))
            .transpose()?;

        Ok(ToolCall {
            id: fields.string("id"),
            index: fields.u32("index"),
            kind: fields.string("type"),
            function,
        })
    }

    fn decode_function(&self, map: &Map<String, Value>, path: FieldPath) -> Result<Function> {
        let fields = Fields::new(map, &path);
        let name = fields.required_string("name")?;
        let arguments_raw = fields.optional("arguments", |_| read_arguments_raw(map));

        let arguments = match arguments_raw.as_deref().map(parse_arguments) {
            None => None,
            Some(Ok(arguments)) => Some(arguments),
            Some(Err(source)) => match self.options.arguments {
                ArgumentsPolicy::Strict => {
                    return Err(DecodeError::Arguments {
                        path: path.key("arguments"),
                        source,
                    });
                }
                ArgumentsPolicy::Lenient => {
                    warn!(
                        field = %path.key("arguments"),
                        function = %name,
                        error = %source,
                        "tool call arguments are not a JSON object, keeping raw string only"
                    );
                    metrics::counter!(telemetry::UNPARSED_ARGUMENTS_TOTAL).increment(1);
                    None
                }
            },
        };

        Ok(Function {
            name,
            arguments_raw,
            arguments,
        })
    }
}

fn decode_usage(map: &Map<String, Value>, path: &FieldPath) -> Usage {
    let fields = Fields::new(map, path);
    Usage {
        completion_tokens: fields.u64("completion_tokens"),
        prompt_tokens: fields.u64("prompt_tokens"),
        total_tokens: fields.u64("total_tokens"),
    }
}

fn record(result: Result<ChatCompletionResponse>) -> Result<ChatCompletionResponse> {
    match &result {
        Ok(response) => {
            debug!(
                choices = response.choices.len(),
                id = ?response.id,
                model = ?response.model,
                provider = ?response.provider,
                "decoded chat completion"
            );
            metrics::counter!(telemetry::DECODES_TOTAL, "status" => "ok").increment(1);
        }
        Err(err) => {
            debug!(error = %err, "failed to decode chat completion");
            metrics::counter!(telemetry::DECODES_TOTAL, "status" => "error").increment(1);
        }
    }
    result
}
