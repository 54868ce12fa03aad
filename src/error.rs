//! Appender errors

use thiserror::Error;

/// Errors produced while mapping and persisting log events
#[derive(Debug, Error)]
pub enum AppenderError {
    /// A required value was absent
    #[error("required value `{0}` was absent")]
    NullInput(&'static str),

    /// A required string was empty or whitespace-only
    #[error("value for `{0}` was empty")]
    EmptyInput(&'static str),

    /// A value configured as numeric did not parse as a number
    #[error("value `{0}` is not numeric")]
    NotNumeric(String),

    /// Binary encoding or decoding failed
    #[error("binary encoding failed: {0}")]
    Encode(String),

    /// The remote write failed
    #[error("write to DynamoDB failed: {0}")]
    Transport(String),

    /// The appender has already been closed
    #[error("appender is closed")]
    Closed,
}

impl AppenderError {
    /// Create a not-numeric error
    pub fn not_numeric(value: impl Into<String>) -> Self {
        Self::NotNumeric(value.into())
    }

    /// Create an encoding error
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
