//! DynamoDB appender
//!
//! Owns the configured parameter list and a lazily-connected data writer.
//! On flush it builds one write request per buffered event, applying every
//! parameter in configuration order, then dispatches the requests as
//! independent concurrent writes joined before the flush returns. No
//! ordering is guaranteed between sibling writes within one batch.

use std::sync::Arc;

use futures::future::join_all;

use crate::config::DynamoDbAppenderConfig;
use crate::error::AppenderError;
use crate::event::LogEvent;
use crate::metrics::{AppenderMetrics, AppenderMetricsHandle};
use crate::parameter::Parameter;
use crate::schema;
use crate::writer::{DataWriter, DynamoDbDataWriter, PutRequest};

/// Flush lifecycle implemented by appenders driven by an external
/// buffering collaborator
#[allow(async_fn_in_trait)]
pub trait BufferedAppend {
    /// Drain one batch of buffered events to storage
    async fn on_flush(&mut self, batch: &[LogEvent]) -> Result<(), AppenderError>;

    /// Release owned resources; must be idempotent
    async fn on_close(&mut self) -> Result<(), AppenderError>;
}

/// An appender that writes log events to an Amazon DynamoDB table
///
/// The writer connects on first flush and is released exactly once on
/// close. After close, further flushes fail with
/// [`AppenderError::Closed`].
pub struct DynamoDbAppender<W: DataWriter = DynamoDbDataWriter> {
    config: DynamoDbAppenderConfig,
    parameters: Vec<Parameter>,
    writer: Option<W>,
    metrics: Arc<AppenderMetrics>,
    closed: bool,
}

impl<W: DataWriter> DynamoDbAppender<W> {
    /// Create an appender from configuration
    ///
    /// Configured parameter specs become the parameter list; when none are
    /// configured the fixed schema is used.
    pub fn new(config: DynamoDbAppenderConfig) -> Self {
        let parameters = config
            .parameters
            .iter()
            .cloned()
            .map(|spec| spec.into_parameter())
            .collect();

        Self {
            config,
            parameters,
            writer: None,
            metrics: Arc::new(AppenderMetrics::new()),
            closed: false,
        }
    }

    /// Create an appender with an already-connected writer
    pub fn with_writer(config: DynamoDbAppenderConfig, writer: W) -> Self {
        let mut appender = Self::new(config);
        appender.writer = Some(writer);
        appender
    }

    /// Append a parameter to the ordered list
    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Reference to the configuration
    pub fn config(&self) -> &DynamoDbAppenderConfig {
        &self.config
    }

    /// Reference to the metrics
    pub fn metrics(&self) -> &AppenderMetrics {
        &self.metrics
    }

    /// Cloneable metrics handle that survives close
    pub fn metrics_handle(&self) -> AppenderMetricsHandle {
        AppenderMetricsHandle::new(Arc::clone(&self.metrics))
    }

    /// Whether the writer has been connected
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    /// Drain a batch of events, one write per event
    ///
    /// Requests are built in sequence order, then dispatched concurrently
    /// and joined before returning. In strict mode the first transport
    /// failure propagates after all sibling writes have completed;
    /// otherwise failures were already logged and swallowed at the writer.
    pub async fn flush(&mut self, events: &[LogEvent]) -> Result<(), AppenderError> {
        if self.closed {
            return Err(AppenderError::Closed);
        }

        self.metrics.record_events(events.len() as u64);

        if events.is_empty() {
            return Ok(());
        }

        if self.parameters.is_empty() {
            self.parameters = schema::default_parameters(self.config.serialize_exceptions);
        }

        if self.writer.is_none() {
            self.writer = Some(W::connect(&self.config, Arc::clone(&self.metrics)).await?);
        }
        let Some(writer) = self.writer.as_ref() else {
            return Err(AppenderError::transport("writer unavailable"));
        };

        let table_name = self.config.table_name_with_prefix();
        let mut requests = Vec::with_capacity(events.len());

        for event in events {
            let mut request = PutRequest::new(table_name.as_str());
            for parameter in &self.parameters {
                parameter.apply(&mut request.item, event)?;
            }
            requests.push(request);
        }

        let results = join_all(requests.into_iter().map(|request| writer.write(request))).await;

        self.metrics.record_flush();
        tracing::debug!(table = %table_name, events = events.len(), "flushed events");

        for result in results {
            result?;
        }

        Ok(())
    }

    /// Release the data writer
    ///
    /// Idempotent; the underlying client connection is released exactly
    /// once, and only if the writer was ever connected.
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            if self.writer.take().is_some() {
                tracing::debug!(table = %self.config.table_name_with_prefix(), "appender closed");
            }
        }
    }
}

impl<W: DataWriter> BufferedAppend for DynamoDbAppender<W> {
    async fn on_flush(&mut self, batch: &[LogEvent]) -> Result<(), AppenderError> {
        self.flush(batch).await
    }

    async fn on_close(&mut self) -> Result<(), AppenderError> {
        self.close();
        Ok(())
    }
}

#[cfg(test)]
#[path = "appender_test.rs"]
mod appender_test;
