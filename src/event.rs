//! Log event model
//!
//! A [`LogEvent`] is the unit handed to the appender by the host framework:
//! a rendered message plus severity, timestamp, and caller identity. Events
//! are immutable once received; the `with_*` builders are for construction
//! only.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl Level {
    /// Get the level as a static string
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exception details attached to a log event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    /// Exception message
    pub message: String,

    /// Stack trace, if one was captured
    pub stack_trace: Option<String>,
}

impl ExceptionInfo {
    /// Create exception info from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack_trace: None,
        }
    }

    /// Attach a stack trace
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }
}

/// A single log event received from the host framework
#[derive(Debug, Clone)]
pub struct LogEvent {
    message: String,
    level: Level,
    timestamp: DateTime<Utc>,
    thread_name: Option<String>,
    user_name: Option<String>,
    machine_name: Option<String>,
    domain: Option<String>,
    identity: Option<String>,
    exception: Option<ExceptionInfo>,
}

impl LogEvent {
    /// Create an event with the current timestamp
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            timestamp: Utc::now(),
            thread_name: None,
            user_name: None,
            machine_name: None,
            domain: None,
            identity: None,
            exception: None,
        }
    }

    /// Override the event timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the originating thread name
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = Some(thread_name.into());
        self
    }

    /// Set the user name active when the event was logged
    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Set the machine name the event originated from
    pub fn with_machine_name(mut self, machine_name: impl Into<String>) -> Self {
        self.machine_name = Some(machine_name.into());
        self
    }

    /// Set the application domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the caller identity
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Attach exception details
    pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    /// Rendered message text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Event timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Originating thread name
    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    /// Active user name
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Originating machine name
    pub fn machine_name(&self) -> Option<&str> {
        self.machine_name.as_deref()
    }

    /// Application domain
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Caller identity
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Attached exception, if any
    pub fn exception(&self) -> Option<&ExceptionInfo> {
        self.exception.as_ref()
    }
}
