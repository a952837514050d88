//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (MetricSample → MetricsSink)
//!
//! After every invocation:
//!     → flush.rs (FlushLayer runs the flush hook)
//!
//! Consumers:
//!     → CloudWatch Logs (JSON lines on stdout)
//!     → Metrics snapshot (Prometheus text, logged at DEBUG)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request id and X-Ray trace id on every start-of-invocation line
//! - Metric sinks are passed in, never looked up globally by handlers

pub mod flush;
pub mod logging;
pub mod metrics;

pub use self::flush::FlushLayer;
pub use self::logging::init_logging;
pub use self::metrics::{init_metrics, MetricSample, MetricsSink, RecorderSink, QUEUE_SIZE_CHANGE};
