//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML. Every field
//! has a default, so an empty file yields a usable configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the handler binary.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HandlerConfig {
    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// HTTP fetch variant settings.
    pub fetch: FetchConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line (CloudWatch friendly).
    #[default]
    Json,
    /// Human readable multi-line output.
    Pretty,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Install the metrics recorder and attach the metric sink.
    pub metrics_enabled: bool,

    /// Render the metrics snapshot to the log after each invocation.
    pub metrics_flush: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
            metrics_enabled: true,
            metrics_flush: true,
        }
    }
}

/// HTTP fetch configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Fixed GET target.
    pub target_url: String,

    /// User-Agent sent with the request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            target_url: "https://aws.amazon.com/".to_string(),
            user_agent: concat!("instrumented-handlers/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
