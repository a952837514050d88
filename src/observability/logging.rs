//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per execution environment
//! - Pick JSON (CloudWatch) or pretty output from config
//! - Let `RUST_LOG` override the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON without ANSI colours; CloudWatch does not render escape codes
//! - Re-initialization is a no-op so tests and warm starts never panic

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    let level = config.log_level.to_ascii_lowercase();
    format!("instrumented_handlers={level},lambda_runtime={level},warn")
}

/// Install the global subscriber. Returns `false` if one was already installed.
pub fn init_logging(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.is_ok()
}
