use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{CertificateDetails, StaticCodeLookup, VerificationLookup, VerificationRecord};
use crate::seed::{read_records, AuthRecord, SeedError};

/// Read-only index of seeded certificates keyed by serial number.
///
/// Codes not in the index fall through to the placeholder lookup, so the
/// demo code keeps verifying when a seed file is configured.
#[derive(Clone)]
pub struct SeedLedgerLookup {
    records: Arc<HashMap<String, AuthRecord>>,
    fallback: StaticCodeLookup,
}

impl SeedLedgerLookup {
    pub fn new(records: Vec<AuthRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.serial_number.clone(), r))
            .collect();
        Self {
            records: Arc::new(records),
            fallback: StaticCodeLookup::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let records = read_records(path)?;
        info!(path = %path.display(), count = records.len(), "Loaded verification seed file");
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl VerificationLookup for SeedLedgerLookup {
    async fn find(&self, code: &str) -> Option<VerificationRecord> {
        match self.records.get(code) {
            Some(record) => Some(VerificationRecord {
                code: record.serial_number.clone(),
                issued_at: format!("{:04}-01-01", record.year),
                details: Some(CertificateDetails {
                    celebrity: record.celebrity.clone(),
                    role: record.role.clone(),
                    item_description: record.item_description.clone(),
                }),
            }),
            None => self.fallback.find(code).await,
        }
    }
}
