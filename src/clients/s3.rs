//! S3 bucket listing through the AWS SDK.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};

use crate::clients::{BucketStore, StoreConnector};
use crate::handler::BoxError;

/// Builds a fresh S3 client for every invocation from shared SDK configuration.
#[derive(Clone, Debug)]
pub struct S3Connector {
    config: SdkConfig,
}

impl S3Connector {
    /// Create a connector from already loaded SDK configuration.
    pub fn new(config: SdkConfig) -> Self {
        Self { config }
    }

    /// Load SDK configuration from the Lambda environment.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        tracing::info!(
            region = ?config.region(),
            "AWS SDK configuration loaded"
        );
        Self::new(config)
    }
}

impl StoreConnector for S3Connector {
    type Client = S3Store;

    fn connect(&self) -> S3Store {
        S3Store {
            client: aws_sdk_s3::Client::new(&self.config),
        }
    }
}

/// S3 client scoped to one invocation.
#[derive(Debug)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

#[async_trait]
impl BucketStore for S3Store {
    async fn list_buckets(&self) -> Result<Vec<String>, BoxError> {
        let output = self.client.list_buckets().send().await?;
        Ok(output
            .buckets()
            .iter()
            .map(|bucket| bucket.name().unwrap_or_default().to_string())
            .collect())
    }
}
