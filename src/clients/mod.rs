//! Delegated external clients.
//!
//! # Responsibilities
//! - Define the seams handlers call through (store listing, HTTP fetch)
//! - Provide production adapters (`aws-sdk-s3`, `reqwest`)
//!
//! # Design Decisions
//! - A connector hands out one scoped client per invocation; dropping it releases it
//! - A fetched response body is consumed by reading it, so release happens on
//!   both the success and the error path

pub mod http;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::handler::BoxError;

pub use self::http::{ReqwestBody, ReqwestFetcher, TRACE_HEADER};
pub use self::s3::{S3Connector, S3Store};

/// Factory for per-invocation object store clients.
pub trait StoreConnector: Send + Sync {
    type Client: BucketStore;

    /// Acquire a client scoped to the current invocation.
    fn connect(&self) -> Self::Client;
}

/// An object store client able to list its top-level collections.
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// List bucket names visible to the caller.
    async fn list_buckets(&self) -> Result<Vec<String>, BoxError>;
}

/// HTTP client issuing a single GET.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    type Body: ResponseBody;

    /// Send a GET to `url`, propagating `trace_id` when present.
    async fn get(&self, url: &Url, trace_id: Option<&str>) -> Result<Self::Body, BoxError>;
}

/// An open response whose body has not been read yet.
#[async_trait]
pub trait ResponseBody: Send + Sized {
    /// HTTP status code of the response.
    fn status(&self) -> u16;

    /// Read the full body, releasing the response.
    async fn into_bytes(self) -> Result<Bytes, BoxError>;
}
