//! Per-invocation telemetry flush.
//!
//! A Lambda execution environment may be frozen as soon as the handler
//! returns, so buffered telemetry is pushed out after every invocation
//! instead of on a timer.

use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use lambda_runtime::tower::{Layer, Service};
use metrics_exporter_prometheus::PrometheusHandle;

/// Callback run after each invocation completes.
pub type FlushHook = Arc<dyn Fn() + Send + Sync>;

/// Layer running a flush hook after the inner service finishes, on success and on error.
#[derive(Clone)]
pub struct FlushLayer {
    hook: FlushHook,
}

impl FlushLayer {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            hook: Arc::new(hook),
        }
    }

    /// Layer whose hook renders the Prometheus snapshot at DEBUG.
    pub fn for_metrics(handle: Option<PrometheusHandle>) -> Self {
        Self::new(move || {
            if let Some(handle) = &handle {
                handle.run_upkeep();
                tracing::debug!(snapshot = %handle.render(), "Metrics flushed");
            }
        })
    }

    /// Layer that does nothing after an invocation.
    pub fn noop() -> Self {
        Self::new(|| {})
    }
}

impl<S> Layer<S> for FlushLayer {
    type Service = FlushService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FlushService {
            inner,
            hook: self.hook.clone(),
        }
    }
}

/// Service produced by [`FlushLayer`].
#[derive(Clone)]
pub struct FlushService<S> {
    inner: S,
    hook: FlushHook,
}

impl<S, Req> Service<Req> for FlushService<S>
where
    S: Service<Req>,
    S::Future: Send + 'static,
    S::Response: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        let fut = self.inner.call(req);
        let hook = self.hook.clone();
        Box::pin(async move {
            let result = fut.await;
            hook();
            result
        })
    }
}
