//! Decoded chat-completion response types.

mod message;
mod response;
mod tool;

pub use message::Message;
pub use response::{ChatCompletionResponse, Choice, Usage};
pub use tool::{Function, ToolCall};
