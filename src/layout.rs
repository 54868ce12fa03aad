//! Rendering rules
//!
//! A [`Layout`] extracts one scalar value from a log event. Parameters bind
//! a layout to an output column; absent values make the parameter contribute
//! nothing to the record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::encode::ByteEncode;
use crate::event::LogEvent;

/// A scalar value rendered from a log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Textual value
    Text(String),

    /// Binary value
    Bytes(Vec<u8>),
}

impl Rendered {
    /// Create a textual value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a binary value
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(value.into())
    }

    /// Textual form, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bytes(_) => None,
        }
    }

    /// Byte form (UTF-8 bytes for text values)
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Bytes(b) => b,
        }
    }

    /// Whether the value is empty (whitespace-only text counts as empty)
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Bytes(b) => b.is_empty(),
        }
    }
}

/// A rendering rule that extracts one scalar value from a log event
pub trait Layout: Send + Sync {
    /// Render the event to a scalar value, or `None` when the source field
    /// is absent
    fn format(&self, event: &LogEvent) -> Option<Rendered>;
}

/// Adapter turning a closure into a [`Layout`]
pub struct FnLayout<F>(pub F);

impl<F> Layout for FnLayout<F>
where
    F: Fn(&LogEvent) -> Option<Rendered> + Send + Sync,
{
    fn format(&self, event: &LogEvent) -> Option<Rendered> {
        (self.0)(event)
    }
}

/// Canned rendering rules covering the event fields of the fixed schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventField {
    /// A fresh unique id, generated per render
    EventId,

    /// Event timestamp, invariant RFC 3339 format
    Timestamp,

    /// Rendered message text
    Message,

    /// Severity level
    Level,

    /// Active user name
    UserName,

    /// Originating machine name
    MachineName,

    /// Originating thread name
    ThreadName,

    /// Application domain
    Domain,

    /// Caller identity
    Identity,

    /// Exception message, when an exception is attached
    ExceptionMessage,

    /// Exception stack trace, when one was captured
    StackTrace,

    /// Byte-encoded exception payload
    ExceptionPayload,
}

impl Layout for EventField {
    fn format(&self, event: &LogEvent) -> Option<Rendered> {
        match self {
            EventField::EventId => Some(Rendered::Text(Uuid::new_v4().to_string())),
            EventField::Timestamp => Some(Rendered::Text(format_timestamp(event.timestamp()))),
            EventField::Message => Some(Rendered::text(event.message())),
            EventField::Level => Some(Rendered::text(event.level().as_str())),
            EventField::UserName => event.user_name().map(Rendered::text),
            EventField::MachineName => event.machine_name().map(Rendered::text),
            EventField::ThreadName => event.thread_name().map(Rendered::text),
            EventField::Domain => event.domain().map(Rendered::text),
            EventField::Identity => event.identity().map(Rendered::text),
            EventField::ExceptionMessage => event
                .exception()
                .map(|e| Rendered::text(e.message.as_str())),
            EventField::StackTrace => event
                .exception()
                .and_then(|e| e.stack_trace.as_deref())
                .map(Rendered::text),
            EventField::ExceptionPayload => {
                let exception = event.exception()?;
                match exception.to_bytes() {
                    Ok(bytes) => Some(Rendered::Bytes(bytes)),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to encode exception payload");
                        None
                    }
                }
            }
        }
    }
}

/// Format a timestamp with an invariant, culture-independent representation
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
