//! Instrumented handler subsystem.
//!
//! # Data Flow
//! ```text
//! Lambda runtime event
//!     → log start (request id, X-Ray trace id)
//!     → one delegated call (storage.rs / fetch.rs / queue.rs)
//!     → success: build response, optional metric sample
//!     → failure: HandlerError::DelegatedCall → runtime error report
//! ```
//!
//! # Design Decisions
//! - Each variant is a standalone struct; collaborators are passed in
//! - Per-invocation client and response handles are owned values, released on drop
//! - No retries, no partial results

pub mod fetch;
pub mod queue;
pub mod storage;
pub mod types;

pub use fetch::HttpFetchHandler;
pub use queue::QueueLoggingHandler;
pub use storage::StorageListingHandler;
pub use types::{BoxError, HandlerError, HandlerResult};

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use lambda_runtime::Context;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Span;

static COLD_START: AtomicBool = AtomicBool::new(true);

/// Span wrapping one invocation. Every event inside it carries the invocation id.
///
/// The first span opened in this execution environment is marked as a cold start.
pub(crate) fn invocation_span(context: &Context) -> Span {
    let coldstart = COLD_START.swap(false, Ordering::Relaxed);
    tracing::info_span!(
        "lambda.invocation",
        faas.invocation_id = %context.request_id,
        faas.trace_id = context.xray_trace_id.as_deref().unwrap_or_default(),
        faas.coldstart = coldstart,
    )
}

/// Emit the start-of-invocation log line.
pub(crate) fn log_start(context: &Context) {
    tracing::info!(
        request_id = %context.request_id,
        trace_id = context.xray_trace_id.as_deref().unwrap_or_default(),
        "Serving lambda request."
    );
}

/// Build a proxy response carrying only a text body.
pub(crate) fn text_response(body: String) -> ApiGatewayProxyResponse {
    let mut response = ApiGatewayProxyResponse::default();
    response.status_code = 200;
    response.body = Some(Body::Text(body));
    response
}
