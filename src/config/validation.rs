//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (known log level, http(s) target, non-empty agent)
//! - Report every violation at once

use thiserror::Error;
use url::Url;

use crate::config::schema::HandlerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("invalid fetch target '{url}': {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("fetch user agent must not be empty")]
    EmptyUserAgent,
}

/// Check a parsed configuration, collecting all violations.
pub fn validate_config(config: &HandlerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let target = &config.fetch.target_url;
    match Url::parse(target) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidTarget {
            url: target.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidTarget {
            url: target.clone(),
            reason: e.to_string(),
        }),
    }

    if config.fetch.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
