//! Decoder configuration.

use serde::Deserialize;

/// What to do when a tool call's `arguments` string is present but is not
/// a JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentsPolicy {
    /// Fail the whole decode with [`DecodeError::Arguments`](crate::DecodeError::Arguments).
    #[default]
    Strict,
    /// Keep `arguments_raw`, leave `arguments` empty, log a warning.
    Lenient,
}

/// Options controlling how responses are decoded.
///
/// ```rust
/// # use openrouter_response::{ArgumentsPolicy, DecodeOptions};
/// let options = DecodeOptions::new().arguments_policy(ArgumentsPolicy::Lenient);
/// assert_eq!(options.arguments, ArgumentsPolicy::Lenient);
/// ```
///
/// Also deserializable so it can sit inside a consumer's config file:
///
/// ```toml
/// [openrouter.decode]
/// arguments = "lenient"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DecodeOptions {
    /// Handling of unparseable tool-call arguments. Default: strict.
    #[serde(default)]
    pub arguments: ArgumentsPolicy,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `arguments_policy(ArgumentsPolicy::Lenient)`.
    pub fn lenient() -> Self {
        Self::new().arguments_policy(ArgumentsPolicy::Lenient)
    }

    /// Set the policy for unparseable tool-call arguments.
    #[must_use]
    pub fn arguments_policy(mut self, policy: ArgumentsPolicy) -> Self {
        self.arguments = policy;
        self
    }
}
