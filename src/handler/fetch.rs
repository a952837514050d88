//! HTTP fetch handler.
//!
//! # Responsibilities
//! - Issue exactly one GET to the configured target
//! - Read the whole body and report its size
//!
//! # Design Decisions
//! - The response status is logged but not judged; any completed exchange counts
//! - The X-Ray trace id from the invocation context travels with the request

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::LambdaEvent;
use tracing::Instrument;
use url::Url;

use crate::clients::{HttpFetcher, ResponseBody};
use crate::handler::{invocation_span, log_start, text_response, HandlerError, HandlerResult};

/// Fetches a fixed URL and reports how many bytes came back.
pub struct HttpFetchHandler<F> {
    fetcher: F,
    target: Url,
}

impl<F: HttpFetcher> HttpFetchHandler<F> {
    pub fn new(fetcher: F, target: Url) -> Self {
        Self { fetcher, target }
    }

    /// The URL every invocation fetches.
    pub fn target(&self) -> &Url {
        &self.target
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

        let response = self
            .fetcher
            .get(&self.target, event.context.xray_trace_id.as_deref())
            .await
            .map_err(HandlerError::delegated("http.Get"))?;
        let status = response.status();
        let body = response
            .into_bytes()
            .await
            .map_err(HandlerError::delegated("http.ReadBody"))?;

        tracing::info!(url = %self.target, status, bytes = body.len(), "Fetch complete");
        Ok(text_response(format!("Hello lambda - fetched {} bytes.", body.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test_support::{body_text, proxy_event};
    use crate::handler::BoxError;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    enum Outcome {
        Body(&'static str),
        ConnectFails,
        ReadFails,
    }

    #[derive(Default)]
    struct Lifecycle {
        opened: AtomicUsize,
        closed: AtomicUsize,
        requests: Mutex<Vec<(String, Option<String>)>>,
    }

    struct FakeFetcher {
        outcome: Outcome,
        lifecycle: Arc<Lifecycle>,
    }

    impl FakeFetcher {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                lifecycle: Arc::default(),
            }
        }
    }

    struct FakeBody {
        outcome: Outcome,
        lifecycle: Arc<Lifecycle>,
    }

    #[async_trait]
    impl HttpFetcher for FakeFetcher {
        type Body = FakeBody;

        async fn get(&self, url: &Url, trace_id: Option<&str>) -> Result<FakeBody, BoxError> {
            self.lifecycle
                .requests
                .lock()
                .unwrap()
                .push((url.to_string(), trace_id.map(str::to_string)));
            if let Outcome::ConnectFails = self.outcome {
                return Err("connection refused".into());
            }
            self.lifecycle.opened.fetch_add(1, Ordering::SeqCst);
            Ok(FakeBody {
                outcome: self.outcome.clone(),
                lifecycle: self.lifecycle.clone(),
            })
        }
    }

    #[async_trait]
    impl ResponseBody for FakeBody {
        fn status(&self) -> u16 {
            200
        }

        async fn into_bytes(self) -> Result<Bytes, BoxError> {
            match &self.outcome {
                Outcome::Body(text) => Ok(Bytes::from_static(text.as_bytes())),
                _ => Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset").into()),
            }
        }
    }

    impl Drop for FakeBody {
        fn drop(&mut self) {
            self.lifecycle.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn target() -> Url {
        Url::parse("https://aws.amazon.com/").unwrap()
    }

    #[tokio::test]
    async fn test_body_contains_byte_count() {
        let handler = HttpFetchHandler::new(FakeFetcher::new(Outcome::Body("0123456789")), target());
        let response = handler.handle(proxy_event()).await.unwrap();
        assert_eq!(body_text(&response), "Hello lambda - fetched 10 bytes.");
    }

    #[tokio::test]
    async fn test_counts_bytes_not_chars() {
        let handler = HttpFetchHandler::new(FakeFetcher::new(Outcome::Body("héllo")), target());
        let response = handler.handle(proxy_event()).await.unwrap();
        assert!(body_text(&response).contains("fetched 6 bytes"));
    }

    #[tokio::test]
    async fn test_single_get_with_trace_id() {
        let fetcher = FakeFetcher::new(Outcome::Body("ok"));
        let lifecycle = fetcher.lifecycle.clone();
        let handler = HttpFetchHandler::new(fetcher, target());

        handler.handle(proxy_event()).await.unwrap();

        let requests = lifecycle.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "https://aws.amazon.com/");
        assert_eq!(
            requests[0].1.as_deref(),
            Some("Root=1-5759e988-bd862e3fe1be46a994272793")
        );
    }

    #[tokio::test]
    async fn test_body_released_on_success() {
        let fetcher = FakeFetcher::new(Outcome::Body("ok"));
        let lifecycle = fetcher.lifecycle.clone();
        let handler = HttpFetchHandler::new(fetcher, target());

        handler.handle(proxy_event()).await.unwrap();
        assert_eq!(lifecycle.opened.load(Ordering::SeqCst), 1);
        assert_eq!(lifecycle.closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_body_released_when_read_fails() {
        let fetcher = FakeFetcher::new(Outcome::ReadFails);
        let lifecycle = fetcher.lifecycle.clone();
        let handler = HttpFetchHandler::new(fetcher, target());

        let err = handler.handle(proxy_event()).await.unwrap_err();
        assert_eq!(err.operation(), "http.ReadBody");
        assert_eq!(lifecycle.opened.load(Ordering::SeqCst), 1);
        assert_eq!(lifecycle.closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_connect_failure_propagates() {
        let fetcher = FakeFetcher::new(Outcome::ConnectFails);
        let lifecycle = fetcher.lifecycle.clone();
        let handler = HttpFetchHandler::new(fetcher, target());

        let err = handler.handle(proxy_event()).await.unwrap_err();
        assert_eq!(err.operation(), "http.Get");
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(lifecycle.opened.load(Ordering::SeqCst), 0);
        assert_eq!(lifecycle.closed.load(Ordering::SeqCst), 0);
    }
}
