//! Top-level response, choice and usage types

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::message::Message;
use super::tool::ToolCall;
use crate::DecodeError;

/// A decoded OpenRouter chat-completion response.
///
/// Decode with [`crate::decode_slice`], [`crate::decode_str`], `str::parse`,
/// or through serde (`serde_json::from_str::<ChatCompletionResponse>`).
/// Serializing produces the wire shape again.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatCompletionResponse {
    /// Completion candidates. More than one when the request set `n > 1`.
    pub choices: Vec<Choice>,
    /// Unix timestamp (seconds) of when the completion was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model that served the completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Upstream provider that fulfilled the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    pub fn first_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }

    /// Text content of the first choice, if any.
    pub fn content(&self) -> Option<&str> {
        self.first_choice()?.message.content.as_deref()
    }

    /// Every tool call across all choices, in order.
    pub fn tool_calls(&self) -> impl Iterator<Item = &ToolCall> {
        self.choices
            .iter()
            .filter_map(|choice| choice.message.tool_calls.as_deref())
            .flatten()
    }
}

impl FromStr for ChatCompletionResponse {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode_str(s)
    }
}

/// Decodes with default (strict) [`crate::DecodeOptions`].
impl<'de> Deserialize<'de> for ChatCompletionResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        crate::decode_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Usage {
    /// Tokens in the generated completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u64>,
    /// Tokens in the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,
    /// Prompt plus completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
}

/// One completion candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Choice {
    /// Why generation stopped, as reported (`stop`, `length`,
    /// `content_filter`, `tool_calls`, `function_call`, ...). Providers vary,
    /// so this is kept as an open string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Provider-specific raw finish reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_finish_reason: Option<String>,
    pub message: Message,
}
