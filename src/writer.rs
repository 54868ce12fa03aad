//! DynamoDB data writer
//!
//! Thin client wrapper that sends one `PutItem` request per call. Transport
//! failures are logged to the diagnostic channel and swallowed unless
//! strict mode is enabled; there is no retry and no queueing.

use std::collections::HashMap;
use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::config::DynamoDbAppenderConfig;
use crate::error::AppenderError;
use crate::metrics::AppenderMetrics;

/// Default service endpoint, used when none is configured
pub const DEFAULT_SERVICE_ENDPOINT: &str = "https://dynamodb.us-east-1.amazonaws.com";

/// A transient write request targeting one table
///
/// Built fresh per event and consumed by the writer that dispatches it.
#[derive(Debug, Clone)]
pub struct PutRequest {
    /// Target table name
    pub table_name: String,

    /// Column name to attribute mapping
    pub item: HashMap<String, AttributeValue>,
}

impl PutRequest {
    /// Create an empty request targeting the given table
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            item: HashMap::new(),
        }
    }
}

/// A writer that persists write requests to a remote table service
///
/// The seam between the appender and the transport; test doubles implement
/// this to capture requests without a network.
#[allow(async_fn_in_trait)]
pub trait DataWriter: Sized {
    /// Create a connected writer for the given configuration
    async fn connect(
        config: &DynamoDbAppenderConfig,
        metrics: Arc<AppenderMetrics>,
    ) -> Result<Self, AppenderError>;

    /// Send one write request to the remote service
    async fn write(&self, request: PutRequest) -> Result<(), AppenderError>;
}

/// Data writer backed by the Amazon DynamoDB client
///
/// The client handle is created once and shared by all writes issued by one
/// appender instance; dropping the writer releases it.
pub struct DynamoDbDataWriter {
    client: Client,
    strict: bool,
    metrics: Arc<AppenderMetrics>,
}

impl DynamoDbDataWriter {
    /// The underlying client handle
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl DataWriter for DynamoDbDataWriter {
    async fn connect(
        config: &DynamoDbAppenderConfig,
        metrics: Arc<AppenderMetrics>,
    ) -> Result<Self, AppenderError> {
        let endpoint = config
            .service_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_ENDPOINT);

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(endpoint)
            .load()
            .await;

        tracing::debug!(endpoint = %endpoint, "dynamodb writer connected");

        Ok(Self {
            client: Client::new(&shared),
            strict: config.strict_errors,
            metrics,
        })
    }

    async fn write(&self, request: PutRequest) -> Result<(), AppenderError> {
        let table_name = request.table_name;

        let result = self
            .client
            .put_item()
            .table_name(&table_name)
            .set_item(Some(request.item))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| DisplayErrorContext(&e).to_string());

        handle_put_result(result, &table_name, self.strict, &self.metrics)
    }
}

/// Apply the transport failure policy to one completed put
///
/// Successful puts count an item written. Failures count a write error and
/// are logged and swallowed, unless `strict` is set, in which case they
/// propagate as [`AppenderError::Transport`].
fn handle_put_result(
    result: Result<(), String>,
    table_name: &str,
    strict: bool,
    metrics: &AppenderMetrics,
) -> Result<(), AppenderError> {
    match result {
        Ok(()) => {
            metrics.record_item_written();
            Ok(())
        }
        Err(detail) => {
            metrics.record_write_error();
            tracing::warn!(table = %table_name, error = %detail, "dynamodb put_item failed");

            if strict {
                Err(AppenderError::transport(detail))
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;
