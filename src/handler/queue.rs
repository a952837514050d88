//! SQS message logging handler.

use aws_lambda_events::sqs::SqsEvent;
use lambda_runtime::LambdaEvent;
use tracing::Instrument;

use crate::handler::{invocation_span, HandlerResult};

/// Logs the source queue and body of every message in a batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueueLoggingHandler;

impl QueueLoggingHandler {
    pub fn new() -> Self {
        Self
    }

    /// Emit two lines per message, in batch order. Nothing else is done with the message.
    pub async fn handle(&self, event: LambdaEvent<SqsEvent>) -> HandlerResult<()> {
        let span = invocation_span(&event.context);
        self.serve(event).instrument(span).await
    }

    async fn serve(&self, event: LambdaEvent<SqsEvent>) -> HandlerResult<()> {
        let records = &event.payload.records;
        tracing::info!(
            request_id = %event.context.request_id,
            records = records.len(),
            "Processing message(s) from SQS"
        );

        for message in records {
            let queue = message.event_source_arn.as_deref().unwrap_or_default();
            let body = message.body.as_deref().unwrap_or_default();
            tracing::info!(queue, "SOURCE QUEUE: {}", queue);
            tracing::info!("MESSAGE: {}", body);
        }

        Ok(())
    }
}
