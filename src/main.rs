//! Instrumented AWS Lambda handlers (v1)
//!
//! One binary, three handler variants, selected at cold start.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │              LAMBDA EXECUTION ENV            │
//!                        │                                              │
//!   Invocation event     │  ┌──────────┐   ┌─────────┐   ┌───────────┐  │
//!   ─────────────────────┼─▶│  lambda  │──▶│  flush  │──▶│  handler  │  │
//!                        │  │ runtime  │   │  layer  │   │  variant  │  │
//!                        │  └──────────┘   └─────────┘   └─────┬─────┘  │
//!                        │                                     │        │
//!                        │                                     ▼        │
//!   Invocation result    │                              ┌───────────┐   │     S3 / HTTP
//!   ◀────────────────────┼──────────────────────────────│  client   │◀──┼──── target
//!                        │                              └───────────┘   │
//!                        │                                              │
//!                        │  Cross-cutting: config, logging, metrics     │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use aws_lambda_events::sqs::SqsEvent;
use clap::{Parser, ValueEnum};
use lambda_runtime::{service_fn, tower::Layer, Error, LambdaEvent};
use url::Url;

use instrumented_handlers::clients::{ReqwestFetcher, S3Connector};
use instrumented_handlers::config::load_or_default;
use instrumented_handlers::observability::{init_logging, init_metrics, FlushLayer, RecorderSink};
use instrumented_handlers::{HttpFetchHandler, QueueLoggingHandler, StorageListingHandler};

#[derive(Parser)]
#[command(name = "instrumented-handlers")]
#[command(about = "Sample Lambda handlers with instrumented outbound calls", long_about = None)]
struct Cli {
    /// Handler variant to serve
    #[arg(value_enum)]
    handler: HandlerKind,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "HANDLER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HandlerKind {
    /// List S3 buckets and report the count
    Storage,
    /// Fetch the configured URL and report its size
    Fetch,
    /// Log every SQS message in the batch
    Queue,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    init_logging(&config.observability);

    tracing::info!(
        handler = ?cli.handler,
        log_format = ?config.observability.log_format,
        metrics_enabled = config.observability.metrics_enabled,
        "instrumented-handlers v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let metrics_enabled = config.observability.metrics_enabled;
    let metrics_handle = if metrics_enabled { init_metrics() } else { None };
    let flush = if config.observability.metrics_flush {
        FlushLayer::for_metrics(metrics_handle)
    } else {
        FlushLayer::noop()
    };

    match cli.handler {
        HandlerKind::Storage => {
            let mut handler = StorageListingHandler::new(S3Connector::from_env().await);
            if metrics_enabled {
                handler = handler.with_metrics(Arc::new(RecorderSink::new()));
            }
            let handler = Arc::new(handler);

            lambda_runtime::run(flush.layer(service_fn(
                move |event: LambdaEvent<ApiGatewayProxyRequest>| {
                    let handler = handler.clone();
                    async move { handler.handle(event).await.map_err(Error::from) }
                },
            )))
            .await
        }
        HandlerKind::Fetch => {
            let target = Url::parse(&config.fetch.target_url)?;
            let fetcher = ReqwestFetcher::new(&config.fetch)?;
            tracing::info!(target = %target, "HTTP fetcher ready");
            let handler = Arc::new(HttpFetchHandler::new(fetcher, target));

            lambda_runtime::run(flush.layer(service_fn(
                move |event: LambdaEvent<ApiGatewayProxyRequest>| {
                    let handler = handler.clone();
                    async move { handler.handle(event).await.map_err(Error::from) }
                },
            )))
            .await
        }
        HandlerKind::Queue => {
            let handler = QueueLoggingHandler::new();

            lambda_runtime::run(flush.layer(service_fn(move |event: LambdaEvent<SqsEvent>| {
                async move { handler.handle(event).await.map_err(Error::from) }
            })))
            .await
        }
    }
}
