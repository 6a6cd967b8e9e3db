//! Decode error types

use std::fmt;

/// One step in a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key, using the Rust field name.
    Key(&'static str),
    /// Array position.
    Index(usize),
}

/// Location of a field inside a decoded response, e.g.
/// `choices[0].message.tool_calls[1].function.name`.
///
/// The empty path is the document root and renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The document root (`$`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with an object key.
    #[must_use]
    pub fn key(&self, key: &'static str) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Key(key));
        next
    }

    /// Extend the path with an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Index(index));
        next
    }

    /// Segments from the root outwards.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// True for the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Errors produced while decoding a chat-completion response.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Payload is not JSON at all.
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),

    /// A required field is missing or has the wrong type.
    #[error("missing or invalid field '{path}': expected {expected}")]
    Structural {
        path: FieldPath,
        expected: &'static str,
    },

    /// A tool call's `arguments` string was present but did not parse as a
    /// JSON object.
    #[error("invalid tool call arguments at '{path}': {source}")]
    Arguments {
        path: FieldPath,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub(crate) fn structural(path: FieldPath, expected: &'static str) -> Self {
        Self::Structural { path, expected }
    }

    /// Path of the offending field, if the error is tied to one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::Syntax(_) => None,
            Self::Structural { path, .. } | Self::Arguments { path, .. } => Some(path),
        }
    }
}

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;
