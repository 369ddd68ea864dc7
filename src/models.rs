use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::storage::UploadIssuer;
use crate::verification::VerificationLookup;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub issuer: UploadIssuer,
    pub lookup: Arc<dyn VerificationLookup>,
}

/// Query string of `GET /api/verify`. A missing `code` is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyQuery {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}
