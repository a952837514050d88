//! Object store listing handler.
//!
//! # Responsibilities
//! - Acquire one store client per invocation and list buckets
//! - Report the bucket count in the response body
//! - Emit the demonstration metric sample after a successful listing

use std::sync::Arc;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::LambdaEvent;
use tracing::Instrument;

use crate::clients::{BucketStore, StoreConnector};
use crate::handler::{invocation_span, log_start, text_response, HandlerError, HandlerResult};
use crate::observability::metrics::{MetricsSink, QUEUE_SIZE_CHANGE};

/// Lists buckets through a scoped client and reports how many were found.
pub struct StorageListingHandler<C> {
    connector: C,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl<C: StoreConnector> StorageListingHandler<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            metrics: None,
        }
    }

    /// Record [`QUEUE_SIZE_CHANGE`] into `sink` on every successful invocation.
    pub fn with_metrics(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.metrics = Some(sink);
        self
    }

    pub async fn handle(
        &self,
        event: LambdaEvent<ApiGatewayProxyRequest>,
    ) -> HandlerResult<ApiGatewayProxyResponse> {
        let span = invocation_span(&event.context);
        self.serve(event).instrument(span).await
    }

    async fn serve(
        &self,
        event: LambdaEvent<ApiGatewayProxyRequest>,
    ) -> HandlerResult<ApiGatewayProxyResponse> {
        log_start(&event.context);

        let bucket_count = {
            let store = self.connector.connect();
            let buckets = store
                .list_buckets()
                .await
                .map_err(HandlerError::delegated("s3.ListBuckets"))?;
            for name in &buckets {
                tracing::debug!(bucket = %name, "Bucket listed");
            }
            buckets.len()
        };

        tracing::info!(bucket_count, "Bucket listing complete");
        let response = text_response(format!("Hello lambda - found {} buckets.", bucket_count));

        if let Some(sink) = &self.metrics {
            sink.record(&QUEUE_SIZE_CHANGE);
        }

        Ok(response)
    }
}
