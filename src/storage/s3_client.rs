// S3-compatible signer backed by rust-s3

use std::time::Duration;

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use tracing::info;

use super::{SignedUrlProvider, StorageError, StorageResult};
use crate::config::StorageConfig;

pub struct S3Client {
    bucket: Bucket,
}

impl S3Client {
    /// Build a client for the configured bucket.
    ///
    /// With `s3_endpoint` set the region becomes a custom one and path-style
    /// addressing is used, which is what MinIO and most S3 clones expect.
    pub fn new(config: &StorageConfig) -> StorageResult<Self> {
        if config.s3_bucket.trim().is_empty() {
            return Err(StorageError::Config("S3_BUCKET must be set".to_string()));
        }

        let region = match &config.s3_endpoint {
            Some(endpoint) => Region::Custom {
                region: config.s3_region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .s3_region
                .parse::<Region>()
                .map_err(|e| StorageError::Config(format!("invalid region: {}", e)))?,
        };

        let credentials = Credentials::new(
            config.s3_access_key_id.as_deref(),
            config.s3_secret_access_key.as_deref(),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Config(format!("credentials: {}", e)))?;

        let mut bucket = Bucket::new(&config.s3_bucket, region, credentials)
            .map_err(|e| StorageError::Config(e.to_string()))?;
        if config.s3_endpoint.is_some() {
            bucket = bucket.with_path_style();
        }

        info!(bucket = %config.s3_bucket, region = %config.s3_region, "S3 client ready");
        Ok(Self { bucket })
    }
}

#[async_trait]
impl SignedUrlProvider for S3Client {
    async fn presign_put(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        let path = if key.starts_with('/') {
            key.to_string()
        } else {
            format!("/{}", key)
        };

        self.bucket
            .presign_put(path, expires_in.as_secs() as u32, None)
            .await
            .map_err(|e| StorageError::Presign(e.to_string()))
    }
}
