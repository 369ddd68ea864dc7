// Authenticon - autograph verification demo service

pub mod config;
pub mod middleware;
pub mod models;
pub mod report;
pub mod routes;
pub mod seed;
pub mod storage;
pub mod types;
pub mod uploader;
pub mod utils;
pub mod verification;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

use std::sync::Arc;

use tracing::{info, warn};

use crate::storage::{S3Client, SignedUrlProvider, UnavailableSigner, UploadIssuer};
use crate::verification::{SeedLedgerLookup, StaticCodeLookup, VerificationLookup};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}

/// Wire the S3 signer and the verification lookup from configuration.
///
/// A storage misconfiguration does not stop the server: uploads answer 500
/// while pages, verification and reports keep working.
pub fn build_state(config: Config) -> anyhow::Result<AppState> {
    let signer: Arc<dyn SignedUrlProvider> = match S3Client::new(&config.storage) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!(error = %e, "Object storage unavailable, upload URLs will fail");
            Arc::new(UnavailableSigner::new(e.to_string()))
        }
    };

    let lookup: Arc<dyn VerificationLookup> = match &config.verification.seed_file {
        Some(path) => Arc::new(SeedLedgerLookup::from_file(path)?),
        None => {
            info!("No verification seed file configured, only the placeholder code verifies");
            Arc::new(StaticCodeLookup::default())
        }
    };

    Ok(AppState {
        config,
        issuer: UploadIssuer::new(signer),
        lookup,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ServerConfig, StorageConfig, VerificationConfig};
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_build_state_survives_missing_bucket() {
        let config = Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
                cors_allowed_origins: Vec::new(),
                static_dir: PathBuf::from("static"),
            },
            storage: StorageConfig {
                s3_bucket: String::new(),
                s3_region: "us-east-1".to_string(),
                s3_endpoint: None,
                s3_access_key_id: None,
                s3_secret_access_key: None,
            },
            verification: VerificationConfig { seed_file: None },
        };

        let state = build_state(config).unwrap();
        assert!(state.issuer.issue().await.is_err());
        assert!(state.lookup.find("VALID123").await.is_some());
    }
}
