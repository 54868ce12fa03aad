//! Buffering dispatcher
//!
//! Drives the flush lifecycle of a [`BufferedAppend`] implementation:
//! events accumulate until the buffer fills, then the whole batch is handed
//! to the appender. On close, remaining events are drained unless the
//! dispatcher is lossy.

use crate::appender::{BufferedAppend, DynamoDbAppender};
use crate::error::AppenderError;
use crate::event::LogEvent;
use crate::writer::DataWriter;

/// Accumulates events and flushes them to an appender in batches
pub struct BufferingDispatcher<A: BufferedAppend> {
    appender: A,
    buffer: Vec<LogEvent>,
    buffer_size: usize,
    lossy: bool,
    closed: bool,
}

impl<A: BufferedAppend> BufferingDispatcher<A> {
    /// Create a dispatcher flushing every `buffer_size` events
    ///
    /// A lossy dispatcher discards events still buffered at close; a
    /// non-lossy one drains them first. A `buffer_size` of zero flushes
    /// every event immediately.
    pub fn new(appender: A, buffer_size: usize, lossy: bool) -> Self {
        Self {
            appender,
            buffer: Vec::with_capacity(buffer_size),
            buffer_size,
            lossy,
            closed: false,
        }
    }

    /// Reference to the wrapped appender
    pub fn appender(&self) -> &A {
        &self.appender
    }

    /// Number of events currently buffered
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffer one event, flushing when the buffer fills
    pub async fn append(&mut self, event: LogEvent) -> Result<(), AppenderError> {
        if self.closed {
            return Err(AppenderError::Closed);
        }

        self.buffer.push(event);

        if self.buffer.len() >= self.buffer_size.max(1) {
            self.flush_buffer().await?;
        }

        Ok(())
    }

    /// Flush buffered events immediately
    pub async fn flush(&mut self) -> Result<(), AppenderError> {
        if self.closed {
            return Err(AppenderError::Closed);
        }
        self.flush_buffer().await
    }

    /// Close the dispatcher and the wrapped appender
    ///
    /// Drains remaining events first unless lossy. Idempotent; a second
    /// close is a no-op.
    pub async fn close(&mut self) -> Result<(), AppenderError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let drained = if self.lossy {
            let discarded = self.buffer.len();
            if discarded > 0 {
                tracing::debug!(discarded, "lossy close discarded buffered events");
            }
            self.buffer.clear();
            Ok(())
        } else {
            let batch = std::mem::take(&mut self.buffer);
            if batch.is_empty() {
                Ok(())
            } else {
                self.appender.on_flush(&batch).await
            }
        };

        // The appender is released even when the final drain failed.
        let closed = self.appender.on_close().await;
        drained.and(closed)
    }

    async fn flush_buffer(&mut self) -> Result<(), AppenderError> {
        let batch = std::mem::take(&mut self.buffer);
        if batch.is_empty() {
            return Ok(());
        }
        self.appender.on_flush(&batch).await
    }
}

impl<W: DataWriter> BufferingDispatcher<DynamoDbAppender<W>> {
    /// Create a dispatcher using the appender's configured `buffer_size`
    /// and `lossy` settings
    pub fn from_appender(appender: DynamoDbAppender<W>) -> Self {
        let buffer_size = appender.config().buffer_size;
        let lossy = appender.config().lossy;
        Self::new(appender, buffer_size, lossy)
    }
}

#[cfg(test)]
#[path = "buffer_test.rs"]
mod buffer_test;
