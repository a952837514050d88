//! Handler error definitions.

use thiserror::Error;

/// Boxed error surfaced by an external client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that terminate an invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The single delegated external call failed (connectivity, I/O, service error).
    #[error("{operation} failed: {source}")]
    DelegatedCall {
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

impl HandlerError {
    /// Build a mapper that wraps a client failure for `operation` and logs it.
    ///
    /// Meant for `map_err` directly on the delegated call.
    pub fn delegated<E>(operation: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |err| {
            let source = err.into();
            tracing::error!(operation, error = %source, "Delegated call failed");
            Self::DelegatedCall { operation, source }
        }
    }

    /// Name of the delegated operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::DelegatedCall { operation, .. } => operation,
        }
    }
}

/// Result type for handler invocations.
pub type HandlerResult<T> = Result<T, HandlerError>;
