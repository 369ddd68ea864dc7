//! Direct-to-storage Uploader
//!
//! Client side of the upload flow: ask the server for a signed URL, then PUT
//! the file bytes straight to object storage. The server never sees the
//! bytes. One attempt per step; any failure ends the upload.

use std::path::{Path, PathBuf};

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::storage::UploadGrant;

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload URL request failed: {0}")]
    Grant(#[source] reqwest::Error),

    #[error("Upload URL request returned status {0}")]
    GrantStatus(reqwest::StatusCode),

    #[error("Transfer to storage failed: {0}")]
    Transfer(#[source] reqwest::Error),

    #[error("Storage rejected the upload with status {0}")]
    StorageStatus(reqwest::StatusCode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub key: String,
    pub content_type: String,
    pub bytes: usize,
}

pub struct DirectUploader {
    client: reqwest::Client,
    server_url: String,
}

impl DirectUploader {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), server_url)
    }

    pub fn with_client(client: reqwest::Client, server_url: impl Into<String>) -> Self {
        Self {
            client,
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read `path` and upload it through a freshly issued signed URL.
    pub async fn upload_file(&self, path: &Path) -> Result<UploadOutcome, UploadError> {
        let data = tokio::fs::read(path).await.map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content_type = content_type_for(path);
        self.upload_bytes(data, &content_type).await
    }

    pub async fn upload_bytes(&self, data: Vec<u8>, content_type: &str) -> Result<UploadOutcome, UploadError> {
        let grant = self.request_grant().await?;
        debug!(key = %grant.key, "Received upload grant");

        let bytes = data.len();
        let response = self
            .client
            .put(&grant.upload_url)
            .header(CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
            .map_err(UploadError::Transfer)?;

        if !response.status().is_success() {
            return Err(UploadError::StorageStatus(response.status()));
        }

        info!(key = %grant.key, bytes, content_type, "Upload stored");
        Ok(UploadOutcome {
            key: grant.key,
            content_type: content_type.to_string(),
            bytes,
        })
    }

    async fn request_grant(&self) -> Result<UploadGrant, UploadError> {
        let response = self
            .client
            .post(format!("{}/api/upload", self.server_url))
            .send()
            .await
            .map_err(UploadError::Grant)?;

        if !response.status().is_success() {
            return Err(UploadError::GrantStatus(response.status()));
        }

        response.json::<UploadGrant>().await.map_err(UploadError::Grant)
    }
}

/// Declared type from the file extension, or the generic fallback
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::io::Write;

    async fn grant_mock(server: &mut mockito::ServerGuard, key: &str) -> mockito::Mock {
        let body = serde_json::json!({
            "uploadUrl": format!("{}/bucket/{}?X-Amz-Expires=60", server.url(), key),
            "key": key,
            "expiresIn": 60,
        });
        server
            .mock("POST", "/api/upload")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    #[test]
    fn test_content_type_guessing() {
        assert_eq!(content_type_for(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("scan.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("blob")), FALLBACK_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_upload_file_puts_bytes_with_content_type() {
        let mut server = mockito::Server::new_async().await;
        let grant = grant_mock(&mut server, "uploads/abc").await;
        let put = server
            .mock("PUT", "/bucket/uploads/abc")
            .match_query(Matcher::UrlEncoded("X-Amz-Expires".into(), "60".into()))
            .match_header("content-type", "text/plain")
            .match_body("signed by hand")
            .with_status(200)
            .create_async()
            .await;

        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"signed by hand").unwrap();

        let uploader = DirectUploader::new(server.url());
        let outcome = uploader.upload_file(file.path()).await.unwrap();

        assert_eq!(outcome.key, "uploads/abc");
        assert_eq!(outcome.content_type, "text/plain");
        assert_eq!(outcome.bytes, 14);
        grant.assert_async().await;
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_storage_rejection_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _grant = grant_mock(&mut server, "uploads/denied").await;
        let _put = server
            .mock("PUT", "/bucket/uploads/denied")
            .match_query(Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let uploader = DirectUploader::new(server.url());
        let err = uploader
            .upload_bytes(b"x".to_vec(), FALLBACK_CONTENT_TYPE)
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::StorageStatus(s) if s.as_u16() == 403));
    }

    #[tokio::test]
    async fn test_grant_failure_stops_before_transfer() {
        let mut server = mockito::Server::new_async().await;
        let _grant = server
            .mock("POST", "/api/upload")
            .with_status(500)
            .with_body("{\"error\":\"down\"}")
            .create_async()
            .await;
        let put = server
            .mock("PUT", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let uploader = DirectUploader::new(format!("{}/", server.url()));
        let err = uploader
            .upload_bytes(b"x".to_vec(), FALLBACK_CONTENT_TYPE)
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::GrantStatus(s) if s.as_u16() == 500));
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let uploader = DirectUploader::new("http://127.0.0.1:9");
        let err = uploader
            .upload_file(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Read { .. }));
    }
}
