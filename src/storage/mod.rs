//! Upload-URL issuing
//!
//! The application never receives upload bytes. It hands out short-lived
//! signed PUT URLs and the browser (or [`crate::uploader`]) writes straight
//! to object storage.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

pub mod s3_client;

pub use s3_client::*;

/// Lifetime of every issued upload URL. Not configurable per caller.
pub const UPLOAD_URL_EXPIRY_SECS: u32 = 60;

/// Prefix under which upload objects are keyed
pub const UPLOAD_KEY_PREFIX: &str = "uploads";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Config(String),

    #[error("Failed to sign upload URL: {0}")]
    Presign(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Anything that can mint a signed, time-boxed write URL for an object key.
#[async_trait]
pub trait SignedUrlProvider: Send + Sync {
    async fn presign_put(&self, key: &str, expires_in: Duration) -> StorageResult<String>;
}

/// Stands in when the real signer could not be built at startup.
///
/// Every call fails with the original configuration error, so only upload
/// requests are affected.
pub struct UnavailableSigner {
    reason: String,
}

impl UnavailableSigner {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SignedUrlProvider for UnavailableSigner {
    async fn presign_put(&self, _key: &str, _expires_in: Duration) -> StorageResult<String> {
        Err(StorageError::Config(self.reason.clone()))
    }
}

/// Response body of `POST /api/upload`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadGrant {
    pub upload_url: String,
    pub key: String,
    pub expires_in: u32,
}

#[derive(Clone)]
pub struct UploadIssuer {
    provider: Arc<dyn SignedUrlProvider>,
    expires_in: Duration,
}

impl UploadIssuer {
    pub fn new(provider: Arc<dyn SignedUrlProvider>) -> Self {
        Self {
            provider,
            expires_in: Duration::from_secs(UPLOAD_URL_EXPIRY_SECS as u64),
        }
    }

    /// Generate a fresh object key and ask the provider for a signed PUT URL.
    ///
    /// Provider errors are returned as-is; the key is discarded.
    pub async fn issue(&self) -> StorageResult<UploadGrant> {
        let key = new_upload_key();
        debug!(key = %key, "Requesting signed upload URL");

        let upload_url = self.provider.presign_put(&key, self.expires_in).await?;

        info!(key = %key, expires_in = self.expires_in.as_secs(), "Issued upload URL");
        Ok(UploadGrant {
            upload_url,
            key,
            expires_in: self.expires_in.as_secs() as u32,
        })
    }
}

/// `uploads/<uuid v4>`; uniqueness rests entirely on the uuid generator.
pub fn new_upload_key() -> String {
    format!("{}/{}", UPLOAD_KEY_PREFIX, Uuid::new_v4())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Signs nothing; builds a URL shaped like a presigned one.
    pub struct FakeSigner;

    #[async_trait]
    impl SignedUrlProvider for FakeSigner {
        async fn presign_put(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
            Ok(format!(
                "https://storage.test/bucket/{}?X-Amz-Expires={}",
                key,
                expires_in.as_secs()
            ))
        }
    }

    pub struct FailingSigner;

    #[async_trait]
    impl SignedUrlProvider for FailingSigner {
        async fn presign_put(&self, _key: &str, _expires_in: Duration) -> StorageResult<String> {
            Err(StorageError::Presign("provider unavailable".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FailingSigner, FakeSigner};
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_upload_key_shape() {
        let key = new_upload_key();
        let (prefix, id) = key.split_once('/').unwrap();
        assert_eq!(prefix, "uploads");
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_issue_returns_key_inside_url() {
        let issuer = UploadIssuer::new(Arc::new(FakeSigner));
        let grant = issuer.issue().await.unwrap();

        assert!(grant.upload_url.contains(&grant.key));
        assert_eq!(grant.expires_in, 60);
        assert!(grant.upload_url.ends_with("X-Amz-Expires=60"));
    }

    #[tokio::test]
    async fn test_issued_keys_are_distinct() {
        let issuer = UploadIssuer::new(Arc::new(FakeSigner));
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let grant = issuer.issue().await.unwrap();
            assert!(seen.insert(grant.key), "duplicate upload key issued");
        }
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let issuer = UploadIssuer::new(Arc::new(FailingSigner));
        let err = issuer.issue().await.unwrap_err();
        assert!(matches!(err, StorageError::Presign(_)));
    }

    #[tokio::test]
    async fn test_unavailable_signer_reports_config_error() {
        let issuer = UploadIssuer::new(Arc::new(UnavailableSigner::new("S3_BUCKET must be set")));
        let err = issuer.issue().await.unwrap_err();
        assert!(matches!(err, StorageError::Config(reason) if reason == "S3_BUCKET must be set"));
    }

    #[test]
    fn test_grant_serializes_camel_case() {
        let grant = UploadGrant {
            upload_url: "https://x".to_string(),
            key: "uploads/1".to_string(),
            expires_in: 60,
        };
        let json = serde_json::to_value(&grant).unwrap();
        assert_eq!(json["uploadUrl"], "https://x");
        assert_eq!(json["key"], "uploads/1");
        assert_eq!(json["expiresIn"], 60);
    }
}
