//! Appender metrics
//!
//! Atomic counters shared between the appender and its data writer. A
//! cloneable handle stays valid after the appender is closed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics for one appender instance
#[derive(Debug, Default)]
pub struct AppenderMetrics {
    /// Total events received across all flushes
    events_received: AtomicU64,

    /// Total items successfully written
    items_written: AtomicU64,

    /// Write errors encountered
    write_errors: AtomicU64,

    /// Flush operations performed
    flush_count: AtomicU64,
}

impl AppenderMetrics {
    /// Create new metrics instance
    pub const fn new() -> Self {
        Self {
            events_received: AtomicU64::new(0),
            items_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
            flush_count: AtomicU64::new(0),
        }
    }

    /// Record events received in a flush batch
    #[inline]
    pub fn record_events(&self, count: u64) {
        self.events_received.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a successfully written item
    #[inline]
    pub fn record_item_written(&self) {
        self.items_written.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a write error
    #[inline]
    pub fn record_write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a flush operation
    #[inline]
    pub fn record_flush(&self) {
        self.flush_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_received: self.events_received.load(Ordering::Relaxed),
            items_written: self.items_written.load(Ordering::Relaxed),
            write_errors: self.write_errors.load(Ordering::Relaxed),
            flush_count: self.flush_count.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.events_received.store(0, Ordering::Relaxed);
        self.items_written.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
        self.flush_count.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time snapshot of appender metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub events_received: u64,
    pub items_written: u64,
    pub write_errors: u64,
    pub flush_count: u64,
}

/// Cloneable handle for reading appender metrics
///
/// Holds an `Arc` to the counters, so it remains valid after the appender
/// is consumed or closed.
#[derive(Debug, Clone)]
pub struct AppenderMetricsHandle {
    metrics: Arc<AppenderMetrics>,
}

impl AppenderMetricsHandle {
    pub(crate) fn new(metrics: Arc<AppenderMetrics>) -> Self {
        Self { metrics }
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
