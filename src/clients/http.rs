//! Instrumented HTTP client built on reqwest.
//!
//! # Responsibilities
//! - Issue one GET per call inside an `http.client` span
//! - Propagate the Lambda X-Ray trace id to the downstream service
//! - Hand back the open response so the caller decides when the body is read

use async_trait::async_trait;
use bytes::Bytes;
use tracing::Instrument;
use url::Url;

use crate::clients::{HttpFetcher, ResponseBody};
use crate::config::FetchConfig;
use crate::handler::BoxError;

/// Header carrying the X-Ray trace context.
pub const TRACE_HEADER: &str = "x-amzn-trace-id";

/// Fetcher backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build the client from fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    type Body = ReqwestBody;

    async fn get(&self, url: &Url, trace_id: Option<&str>) -> Result<ReqwestBody, BoxError> {
        let span = tracing::info_span!(
            "http.client",
            http.method = "GET",
            http.url = %url,
            http.status_code = tracing::field::Empty,
        );

        let mut request = self.client.get(url.clone());
        if let Some(trace_id) = trace_id {
            request = request.header(TRACE_HEADER, trace_id);
        }

        let response = request.send().instrument(span.clone()).await?;
        span.record("http.status_code", response.status().as_u16());

        Ok(ReqwestBody { response })
    }
}

/// Open reqwest response; reading consumes it.
#[derive(Debug)]
pub struct ReqwestBody {
    response: reqwest::Response,
}

#[async_trait]
impl ResponseBody for ReqwestBody {
    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    async fn into_bytes(self) -> Result<Bytes, BoxError> {
        Ok(self.response.bytes().await?)
    }
}
