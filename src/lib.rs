//! DynamoDB Appender
//!
//! A buffered logging sink that persists log events to an Amazon DynamoDB
//! table, one `PutItem` write per event.
//!
//! # Architecture
//!
//! The host logging framework accumulates events and hands them to the
//! appender in batches. Each event is mapped onto typed DynamoDB attributes
//! by an ordered list of parameters, then dispatched as an independent write.
//!
//! ```text
//! [Host] --events--> [BufferingDispatcher] --on_flush--> [DynamoDbAppender]
//!                                                              |
//!                                          (per event) [Parameter list]
//!                                                              |
//!                                        [DynamoDbDataWriter] --> DynamoDB
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dynamodb_appender::{
//!     BufferingDispatcher, DynamoDbAppender, DynamoDbAppenderConfig, Level, LogEvent,
//! };
//!
//! let config = DynamoDbAppenderConfig::default()
//!     .with_table_name("AppLogs")
//!     .with_buffer_size(512);
//! let appender = DynamoDbAppender::new(config);
//! let mut dispatcher = BufferingDispatcher::from_appender(appender);
//!
//! dispatcher
//!     .append(LogEvent::new(Level::Info, "service started"))
//!     .await?;
//! dispatcher.close().await?;
//! ```
//!
//! # Failure policy
//!
//! Validation errors (absent values, empty strings, non-numeric input)
//! always propagate to the caller. Transport failures are logged to the
//! `tracing` diagnostic channel and swallowed, unless strict mode is
//! enabled, in which case they propagate. There is no retry and no
//! dead-letter queue; a failed write does not affect sibling writes in the
//! same flush batch.

// =============================================================================
// Modules
// =============================================================================

/// Appender orchestration (flush and close lifecycle)
pub mod appender;

/// Typed attribute construction
pub mod attribute;

/// Buffering dispatcher driving the flush lifecycle
pub mod buffer;

/// Appender configuration
pub mod config;

/// Versioned byte-encoding contract for binary columns
pub mod encode;

/// Error types
pub mod error;

/// Log event model
pub mod event;

/// Rendering rules that extract scalar values from events
pub mod layout;

/// Appender metrics
pub mod metrics;

/// Column parameters (rendering rule + attribute type + column name)
pub mod parameter;

/// Fixed-schema column set expressed as a canned parameter list
pub mod schema;

/// DynamoDB data writer
pub mod writer;

// =============================================================================
// Public re-exports
// =============================================================================

pub use appender::{BufferedAppend, DynamoDbAppender};
pub use buffer::BufferingDispatcher;
pub use config::{DynamoDbAppenderConfig, ParameterSpec, DEFAULT_TABLE_NAME};
pub use encode::ByteEncode;
pub use error::AppenderError;
pub use event::{ExceptionInfo, Level, LogEvent};
pub use layout::{EventField, FnLayout, Layout, Rendered};
pub use metrics::{AppenderMetrics, AppenderMetricsHandle, MetricsSnapshot};
pub use parameter::{Parameter, ParameterKind};
pub use writer::{DataWriter, DynamoDbDataWriter, PutRequest, DEFAULT_SERVICE_ENDPOINT};
