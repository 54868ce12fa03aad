//! Tests for appender metrics

use std::sync::Arc;

use super::{AppenderMetrics, AppenderMetricsHandle, MetricsSnapshot};

#[test]
fn test_metrics_new() {
    let metrics = AppenderMetrics::new();
    assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
}

#[test]
fn test_metrics_record() {
    let metrics = AppenderMetrics::new();

    metrics.record_events(3);
    metrics.record_events(2);
    metrics.record_item_written();
    metrics.record_item_written();
    metrics.record_write_error();
    metrics.record_flush();

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.events_received, 5);
    assert_eq!(snapshot.items_written, 2);
    assert_eq!(snapshot.write_errors, 1);
    assert_eq!(snapshot.flush_count, 1);
}

#[test]
fn test_metrics_reset() {
    let metrics = AppenderMetrics::new();

    metrics.record_events(10);
    metrics.record_flush();
    metrics.reset();

    assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
}

#[test]
fn test_handle_shares_counters() {
    let metrics = Arc::new(AppenderMetrics::new());
    let handle = AppenderMetricsHandle::new(Arc::clone(&metrics));
    let clone = handle.clone();

    metrics.record_events(4);
    drop(metrics);

    assert_eq!(handle.snapshot().events_received, 4);
    assert_eq!(clone.snapshot().events_received, 4);
}
