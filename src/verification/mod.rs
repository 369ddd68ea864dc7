//! Verification Lookup
//!
//! Answers "was this certificate code really issued, and when?". Callers only
//! see the [`VerificationLookup`] trait so the placeholder code can be swapped
//! for a real backing store without touching the HTTP layer.

pub mod ledger;

pub use ledger::SeedLedgerLookup;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The one code the demo accepts out of the box
pub const PLACEHOLDER_CODE: &str = "VALID123";
pub const PLACEHOLDER_ISSUED_AT: &str = "2024-01-01";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetails {
    pub celebrity: String,
    pub role: String,
    pub item_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    pub code: String,
    pub issued_at: String,
    pub details: Option<CertificateDetails>,
}

#[async_trait]
pub trait VerificationLookup: Send + Sync {
    /// Exact, case-sensitive match. `None` means the code was never issued.
    async fn find(&self, code: &str) -> Option<VerificationRecord>;
}

/// Accepts a single literal code with a fixed issuance date.
#[derive(Debug, Clone)]
pub struct StaticCodeLookup {
    code: String,
    issued_at: String,
}

impl StaticCodeLookup {
    pub fn new(code: impl Into<String>, issued_at: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            issued_at: issued_at.into(),
        }
    }
}

impl Default for StaticCodeLookup {
    fn default() -> Self {
        Self::new(PLACEHOLDER_CODE, PLACEHOLDER_ISSUED_AT)
    }
}

#[async_trait]
impl VerificationLookup for StaticCodeLookup {
    async fn find(&self, code: &str) -> Option<VerificationRecord> {
        (code == self.code).then(|| VerificationRecord {
            code: self.code.clone(),
            issued_at: self.issued_at.clone(),
            details: None,
        })
    }
}

/// Response body of `GET /api/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CertificateDetails>,
}

impl From<Option<VerificationRecord>> for VerifyResponse {
    fn from(record: Option<VerificationRecord>) -> Self {
        match record {
            Some(record) => Self {
                valid: true,
                issued_at: Some(record.issued_at),
                details: record.details,
            },
            None => Self {
                valid: false,
                issued_at: None,
                details: None,
            },
        }
    }
}
