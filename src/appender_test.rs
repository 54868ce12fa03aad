//! Tests for the DynamoDB appender

use std::sync::{Arc, Mutex};

use super::{BufferedAppend, DynamoDbAppender};
use crate::buffer::BufferingDispatcher;
use crate::config::{DynamoDbAppenderConfig, ParameterSpec};
use crate::error::AppenderError;
use crate::event::{ExceptionInfo, Level, LogEvent};
use crate::layout::EventField;
use crate::metrics::AppenderMetrics;
use crate::schema::columns;
use crate::writer::{DataWriter, PutRequest};

/// Writer double that records every dispatched request
#[derive(Clone, Default)]
struct RecordingWriter {
    requests: Arc<Mutex<Vec<PutRequest>>>,

    /// Fail requests whose `Message` column equals this value
    fail_on_message: Option<&'static str>,
}

impl RecordingWriter {
    fn new() -> (Self, Arc<Mutex<Vec<PutRequest>>>) {
        let writer = Self::default();
        let requests = Arc::clone(&writer.requests);
        (writer, requests)
    }

    fn failing_on(message: &'static str) -> (Self, Arc<Mutex<Vec<PutRequest>>>) {
        let (mut writer, requests) = Self::new();
        writer.fail_on_message = Some(message);
        (writer, requests)
    }
}

impl DataWriter for RecordingWriter {
    async fn connect(
        _config: &DynamoDbAppenderConfig,
        _metrics: Arc<AppenderMetrics>,
    ) -> Result<Self, AppenderError> {
        Ok(Self::default())
    }

    async fn write(&self, request: PutRequest) -> Result<(), AppenderError> {
        let failing = self
            .fail_on_message
            .zip(request.item.get(columns::MESSAGE))
            .is_some_and(|(bad, attr)| attr.as_s().map(|s| s == bad).unwrap_or(false));

        self.requests.lock().unwrap().push(request);

        if failing {
            Err(AppenderError::transport("simulated failure"))
        } else {
            Ok(())
        }
    }
}

fn appender_with(
    config: DynamoDbAppenderConfig,
) -> (DynamoDbAppender<RecordingWriter>, Arc<Mutex<Vec<PutRequest>>>) {
    let (writer, requests) = RecordingWriter::new();
    (DynamoDbAppender::with_writer(config, writer), requests)
}

// ============================================================================
// Flush
// ============================================================================

#[tokio::test]
async fn test_flush_empty_issues_no_writes() {
    let (mut appender, requests) = appender_with(DynamoDbAppenderConfig::default());

    appender.flush(&[]).await.unwrap();

    assert!(requests.lock().unwrap().is_empty());
    assert_eq!(appender.metrics().snapshot().flush_count, 0);
}

#[tokio::test]
async fn test_flush_issues_one_write_per_event() {
    let config = DynamoDbAppenderConfig::default().with_table_name("AppLogs");
    let (mut appender, requests) = appender_with(config);

    let events = [
        LogEvent::new(Level::Info, "one"),
        LogEvent::new(Level::Info, "two"),
    ];
    appender.flush(&events).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.table_name == "AppLogs"));
}

#[tokio::test]
async fn test_flush_single_string_parameter() {
    let config = DynamoDbAppenderConfig::default()
        .with_table_name("AppLogs")
        .with_parameter(ParameterSpec::new("Message", EventField::Message));
    let (mut appender, requests) = appender_with(config);

    appender
        .flush(&[LogEvent::new(Level::Error, "boom")])
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].table_name, "AppLogs");
    assert_eq!(requests[0].item.len(), 1);
    assert_eq!(requests[0].item["Message"].as_s().unwrap(), "boom");
}

#[tokio::test]
async fn test_flush_targets_prefixed_table() {
    let config = DynamoDbAppenderConfig::default()
        .with_table_name("logs")
        .with_table_prefix("prod-");
    let (mut appender, requests) = appender_with(config);

    appender
        .flush(&[LogEvent::new(Level::Info, "x")])
        .await
        .unwrap();

    assert_eq!(requests.lock().unwrap()[0].table_name, "prod-logs");
}

#[tokio::test]
async fn test_later_parameter_overwrites_shared_column() {
    let config = DynamoDbAppenderConfig::default()
        .with_parameter(ParameterSpec::new("Col", EventField::Message))
        .with_parameter(ParameterSpec::new("Col", EventField::Level));
    let (mut appender, requests) = appender_with(config);

    appender
        .flush(&[LogEvent::new(Level::Warning, "text")])
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].item.len(), 1);
    assert_eq!(requests[0].item["Col"].as_s().unwrap(), "warning");
}

// ============================================================================
// Fixed schema
// ============================================================================

#[tokio::test]
async fn test_fixed_schema_emits_id_and_timestamp() {
    let (mut appender, requests) = appender_with(DynamoDbAppenderConfig::default());

    let events = [
        LogEvent::new(Level::Info, "one"),
        LogEvent::new(Level::Info, "two"),
    ];
    appender.flush(&events).await.unwrap();

    let requests = requests.lock().unwrap();
    for request in requests.iter() {
        assert!(request.item.contains_key(columns::ID));
        assert!(request.item.contains_key(columns::TIMESTAMP));
        assert!(request.item.contains_key(columns::MESSAGE));
        assert!(request.item.contains_key(columns::LEVEL));
    }

    // Generated ids are unique per event
    let first = requests[0].item[columns::ID].as_s().unwrap();
    let second = requests[1].item[columns::ID].as_s().unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_fixed_schema_skips_absent_columns() {
    let (mut appender, requests) = appender_with(DynamoDbAppenderConfig::default());

    appender
        .flush(&[LogEvent::new(Level::Info, "plain")])
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    let item = &requests[0].item;
    assert!(!item.contains_key(columns::USERNAME));
    assert!(!item.contains_key(columns::MACHINE_NAME));
    assert!(!item.contains_key(columns::EXCEPTION_MESSAGE));
    assert!(!item.contains_key(columns::EXCEPTION));
}

#[tokio::test]
async fn test_fixed_schema_exception_columns() {
    let (mut appender, requests) = appender_with(DynamoDbAppenderConfig::default());

    let event = LogEvent::new(Level::Error, "boom")
        .with_exception(ExceptionInfo::new("io error").with_stack_trace("at read()"));
    appender.flush(&[event]).await.unwrap();

    let requests = requests.lock().unwrap();
    let item = &requests[0].item;
    assert_eq!(item[columns::EXCEPTION_MESSAGE].as_s().unwrap(), "io error");
    assert_eq!(item[columns::STACK_TRACE].as_s().unwrap(), "at read()");

    // Binary payload requires opt-in
    assert!(!item.contains_key(columns::EXCEPTION));
}

#[tokio::test]
async fn test_serialized_exception_payload_opt_in() {
    let config = DynamoDbAppenderConfig::default().with_serialize_exceptions(true);
    let (mut appender, requests) = appender_with(config);

    let event = LogEvent::new(Level::Error, "boom").with_exception(ExceptionInfo::new("io error"));
    appender.flush(&[event]).await.unwrap();

    let requests = requests.lock().unwrap();
    let payload = requests[0].item[columns::EXCEPTION].as_b().unwrap();
    assert!(!payload.as_ref().is_empty());
}

// ============================================================================
// Failure policy
// ============================================================================

#[tokio::test]
async fn test_failed_write_leaves_siblings_unaffected() {
    let (writer, requests) = RecordingWriter::failing_on("bad");
    let mut appender =
        DynamoDbAppender::with_writer(DynamoDbAppenderConfig::default(), writer);

    let events = [
        LogEvent::new(Level::Info, "good"),
        LogEvent::new(Level::Info, "bad"),
        LogEvent::new(Level::Info, "also good"),
    ];
    let result = appender.flush(&events).await;

    // The failure propagates, but every sibling write was still dispatched.
    assert!(matches!(result, Err(AppenderError::Transport(_))));
    assert_eq!(requests.lock().unwrap().len(), 3);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_writer_connects_on_first_flush() {
    let mut appender: DynamoDbAppender<RecordingWriter> =
        DynamoDbAppender::new(DynamoDbAppenderConfig::default());

    assert!(!appender.is_active());
    appender
        .flush(&[LogEvent::new(Level::Info, "x")])
        .await
        .unwrap();
    assert!(appender.is_active());
}

#[tokio::test]
async fn test_close_is_idempotent() {
    let (mut appender, _requests) = appender_with(DynamoDbAppenderConfig::default());

    appender.close();
    appender.close();

    assert!(!appender.is_active());
}

#[tokio::test]
async fn test_close_without_use_is_safe() {
    let mut appender: DynamoDbAppender<RecordingWriter> =
        DynamoDbAppender::new(DynamoDbAppenderConfig::default());
    appender.close();
    appender.close();
}

#[tokio::test]
async fn test_flush_after_close_fails_cleanly() {
    let (mut appender, _requests) = appender_with(DynamoDbAppenderConfig::default());

    appender.close();
    let result = appender.flush(&[LogEvent::new(Level::Info, "x")]).await;

    assert!(matches!(result, Err(AppenderError::Closed)));
}

#[tokio::test]
async fn test_on_flush_and_on_close_delegate() {
    let (writer, requests) = RecordingWriter::new();
    let mut appender = DynamoDbAppender::with_writer(DynamoDbAppenderConfig::default(), writer);

    appender
        .on_flush(&[LogEvent::new(Level::Info, "x")])
        .await
        .unwrap();
    assert_eq!(requests.lock().unwrap().len(), 1);

    appender.on_close().await.unwrap();
    assert!(!appender.is_active());
}

// ============================================================================
// Metrics
// ============================================================================

#[tokio::test]
async fn test_flush_records_metrics() {
    let (mut appender, _requests) = appender_with(DynamoDbAppenderConfig::default());
    let handle = appender.metrics_handle();

    let events = [
        LogEvent::new(Level::Info, "one"),
        LogEvent::new(Level::Info, "two"),
    ];
    appender.flush(&events).await.unwrap();
    appender.close();

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.events_received, 2);
    assert_eq!(snapshot.flush_count, 1);
}

// ============================================================================
// Config-built dispatcher
// ============================================================================

#[tokio::test]
async fn test_dispatcher_from_appender_uses_configured_buffer_size() {
    let config = DynamoDbAppenderConfig::default().with_buffer_size(2);
    let (appender, requests) = appender_with(config);
    let mut dispatcher = BufferingDispatcher::from_appender(appender);

    dispatcher
        .append(LogEvent::new(Level::Info, "one"))
        .await
        .unwrap();
    assert!(requests.lock().unwrap().is_empty());

    dispatcher
        .append(LogEvent::new(Level::Info, "two"))
        .await
        .unwrap();
    assert_eq!(requests.lock().unwrap().len(), 2);
    assert!(dispatcher.is_empty());
}

#[tokio::test]
async fn test_dispatcher_from_appender_honors_lossy_close() {
    let config = DynamoDbAppenderConfig::default()
        .with_buffer_size(10)
        .with_lossy(true);
    let (appender, requests) = appender_with(config);
    let mut dispatcher = BufferingDispatcher::from_appender(appender);

    dispatcher
        .append(LogEvent::new(Level::Info, "buffered"))
        .await
        .unwrap();
    dispatcher.close().await.unwrap();

    assert!(requests.lock().unwrap().is_empty());
    assert!(!dispatcher.appender().is_active());
}

#[tokio::test]
async fn test_added_parameters_apply_in_order() {
    let config = DynamoDbAppenderConfig::default()
        .with_parameter(ParameterSpec::new("Message", EventField::Message));
    let (mut appender, requests) = appender_with(config);

    appender.add_parameter(crate::parameter::Parameter::new(
        "Level",
        EventField::Level,
    ));

    appender
        .flush(&[LogEvent::new(Level::Debug, "msg")])
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].item.len(), 2);
    assert_eq!(requests[0].item["Level"].as_s().unwrap(), "debug");
}
