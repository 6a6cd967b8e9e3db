//! Typed decoding of OpenRouter chat-completion responses.
//!
//! Turns a non-streaming `/api/v1/chat/completions` response body into
//! owned Rust values. Only the fields a response cannot be used without
//! are required (`choices`, each choice's `message`, each function's
//! `name`); everything else decodes to `None` when missing or mistyped.
//!
//! Tool-call arguments arrive as a JSON object serialized into a string.
//! The decoder keeps that string verbatim in [`Function::arguments_raw`]
//! and parses it into [`Function::arguments`].
//!
//! # Example
//!
//! ```rust
//! use openrouter_response::ChatCompletionResponse;
//!
//! let body = r#"{
//!     "id": "gen-123",
//!     "model": "openai/gpt-4o",
//!     "choices": [{
//!         "finish_reason": "tool_calls",
//!         "message": {
//!             "role": "assistant",
//!             "tool_calls": [{
//!                 "id": "call_1",
//!                 "type": "function",
//!                 "function": { "name": "get_weather", "arguments": "{\"city\":\"Paris\"}" }
//!             }]
//!         }
//!     }]
//! }"#;
//!
//! let response: ChatCompletionResponse = body.parse()?;
//! let function = response.tool_calls().next().and_then(|c| c.function.as_ref()).unwrap();
//! assert_eq!(function.name, "get_weather");
//! assert_eq!(function.arguments.as_ref().unwrap()["city"], "Paris");
//! # Ok::<(), openrouter_response::DecodeError>(())
//! ```

pub mod decode;
pub mod error;
pub mod options;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use decode::{Decoder, decode_slice, decode_str, decode_value};
pub use error::{DecodeError, FieldPath, PathSegment, Result};
pub use options::{ArgumentsPolicy, DecodeOptions};
pub use types::{ChatCompletionResponse, Choice, Function, Message, ToolCall, Usage};
