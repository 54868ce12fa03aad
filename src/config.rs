//! Appender configuration
//!
//! Deserializable configuration for the appender, with builder-style
//! setters for programmatic construction.
//!
//! # Example
//!
//! ```toml
//! [appender]
//! table_name = "AppLogs"
//! table_prefix = "prod-"
//! serialize_exceptions = true
//!
//! [[appender.parameters]]
//! name = "Message"
//! field = "message"
//!
//! [[appender.parameters]]
//! name = "ThreadId"
//! type = "N"
//! field = "thread_name"
//! ```

use serde::Deserialize;

use crate::layout::EventField;
use crate::parameter::{Parameter, ParameterKind};

/// Default table name, used when none is configured
pub const DEFAULT_TABLE_NAME: &str = "log4net";

/// Default number of events buffered before a flush
pub const DEFAULT_BUFFER_SIZE: usize = 512;

/// Configuration for the DynamoDB appender
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DynamoDbAppenderConfig {
    /// Table name. Defaults to `"log4net"`
    pub table_name: String,

    /// Prefix prepended to the table name. Defaults to empty
    pub table_prefix: String,

    /// Service endpoint URL override. When unset, the well-known regional
    /// endpoint is used
    pub service_endpoint: Option<String>,

    /// Whether to persist byte-encoded exception payloads
    pub serialize_exceptions: bool,

    /// Whether transport failures propagate instead of being logged and
    /// swallowed. Defaults to on in debug builds
    pub strict_errors: bool,

    /// Number of events buffered before a flush
    pub buffer_size: usize,

    /// Whether buffered events may be discarded on close
    pub lossy: bool,

    /// Configured column parameters. An empty list selects the fixed schema
    pub parameters: Vec<ParameterSpec>,
}

impl Default for DynamoDbAppenderConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.into(),
            table_prefix: String::new(),
            service_endpoint: None,
            serialize_exceptions: false,
            strict_errors: cfg!(debug_assertions),
            buffer_size: DEFAULT_BUFFER_SIZE,
            lossy: false,
            parameters: Vec::new(),
        }
    }
}

impl DynamoDbAppenderConfig {
    /// Set the table name
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Set the table name prefix
    pub fn with_table_prefix(mut self, table_prefix: impl Into<String>) -> Self {
        self.table_prefix = table_prefix.into();
        self
    }

    /// Set the service endpoint override
    pub fn with_service_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.service_endpoint = Some(endpoint.into());
        self
    }

    /// Enable or disable exception payload serialization
    pub fn with_serialize_exceptions(mut self, serialize_exceptions: bool) -> Self {
        self.serialize_exceptions = serialize_exceptions;
        self
    }

    /// Enable or disable strict transport-error propagation
    pub fn with_strict_errors(mut self, strict_errors: bool) -> Self {
        self.strict_errors = strict_errors;
        self
    }

    /// Set the buffer size
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Enable or disable discarding buffered events on close
    pub fn with_lossy(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    /// Add a configured parameter
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Table name with the prefix applied
    pub fn table_name_with_prefix(&self) -> String {
        format!("{}{}", self.table_prefix, self.table_name)
    }
}

/// A configured column parameter
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSpec {
    /// Output column name
    pub name: String,

    /// Attribute type, string unless specified
    #[serde(default, rename = "type")]
    pub kind: ParameterKind,

    /// Event field rendered into the column
    pub field: EventField,
}

impl ParameterSpec {
    /// Create a string parameter spec
    pub fn new(name: impl Into<String>, field: EventField) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::String,
            field,
        }
    }

    /// Create a parameter spec with an explicit attribute type
    pub fn with_kind(name: impl Into<String>, kind: ParameterKind, field: EventField) -> Self {
        Self {
            name: name.into(),
            kind,
            field,
        }
    }

    /// Convert the spec into a runtime parameter
    pub fn into_parameter(self) -> Parameter {
        Parameter::with_kind(self.name, self.kind, self.field)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
