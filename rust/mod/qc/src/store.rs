use std::sync::Arc;

use labguard_core::{ServiceError, now_rfc3339};
use labguard_kv::{KVError, KVStore};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::model::{LabReport, Sku};

/// KV key holding the SKU catalog.
pub const SKUS_KEY: &str = "labguard_skus";

/// KV key holding all lab reports, in insertion order.
pub const REPORTS_KEY: &str = "labguard_reports";

/// Full snapshot of both collections, written out as a backup file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    pub skus: Vec<Sku>,
    pub reports: Vec<LabReport>,
    /// RFC 3339 time the snapshot was taken.
    pub timestamp: String,
}

impl Backup {
    /// `LabGuard_Backup_<YYYY-MM-DD>.json`, dated from `timestamp`.
    pub fn file_name(&self) -> String {
        let date = self.timestamp.get(..10).unwrap_or(&self.timestamp);
        format!("LabGuard_Backup_{}.json", date)
    }
}

/// Persistent storage for the SKU catalog and lab reports.
///
/// Each collection lives under one key as a JSON array. Every operation is
/// a plain read or read-modify-write against the backend; there is no
/// locking across calls, so one store should have one writer.
pub struct RecordStore {
    kv: Arc<dyn KVStore>,
    seed: Vec<Sku>,
}

impl RecordStore {
    /// `seed` is written as the catalog the first time it is read and no
    /// catalog has been persisted yet.
    pub fn new(kv: Arc<dyn KVStore>, seed: Vec<Sku>) -> Self {
        Self { kv, seed }
    }

    // -----------------------------------------------------------------------
    // SKUs
    // -----------------------------------------------------------------------

    /// The whole catalog, seeding it on first access.
    pub fn list_skus(&self) -> Result<Vec<Sku>, ServiceError> {
        match self.load::<Sku>(SKUS_KEY)? {
            Some(skus) => Ok(skus),
            None => {
                debug!("no catalog persisted, seeding {} skus", self.seed.len());
                self.persist(SKUS_KEY, &self.seed)?;
                Ok(self.seed.clone())
            }
        }
    }

    pub fn get_sku(&self, id: &str) -> Result<Option<Sku>, ServiceError> {
        Ok(self.list_skus()?.into_iter().find(|s| s.id == id))
    }

    /// Replace the SKU with the same id, or append it.
    pub fn save_sku(&self, sku: Sku) -> Result<(), ServiceError> {
        let mut skus = self.list_skus()?;
        match skus.iter_mut().find(|s| s.id == sku.id) {
            Some(existing) => *existing = sku.clone(),
            None => skus.push(sku.clone()),
        }
        self.persist(SKUS_KEY, &skus)?;
        info!("sku {} saved ({})", sku.id, sku.category());
        Ok(())
    }

    /// Remove a SKU. Reports keep their `skuName` snapshot.
    pub fn delete_sku(&self, id: &str) -> Result<(), ServiceError> {
        let mut skus = self.list_skus()?;
        let before = skus.len();
        skus.retain(|s| s.id != id);
        if skus.len() != before {
            self.persist(SKUS_KEY, &skus)?;
            info!("sku {} deleted", id);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reports
    // -----------------------------------------------------------------------

    /// All reports, oldest first.
    pub fn list_reports(&self) -> Result<Vec<LabReport>, ServiceError> {
        Ok(self.load::<LabReport>(REPORTS_KEY)?.unwrap_or_default())
    }

    pub fn get_report(&self, id: &str) -> Result<Option<LabReport>, ServiceError> {
        Ok(self.list_reports()?.into_iter().find(|r| r.id == id))
    }

    /// Append a report. Never replaces an existing entry, even one with the
    /// same id.
    pub fn save_report(&self, report: LabReport) -> Result<(), ServiceError> {
        let mut reports = self.list_reports()?;
        let id = report.id.clone();
        reports.push(report);
        self.persist(REPORTS_KEY, &reports)?;
        info!("report {} saved ({} total)", id, reports.len());
        Ok(())
    }

    pub fn delete_report(&self, id: &str) -> Result<(), ServiceError> {
        let mut reports = self.list_reports()?;
        let before = reports.len();
        reports.retain(|r| r.id != id);
        if reports.len() != before {
            self.persist(REPORTS_KEY, &reports)?;
            info!("report {} deleted", id);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    /// Snapshot both collections. Reads only, apart from first-access seeding.
    pub fn export_all(&self) -> Result<Backup, ServiceError> {
        Ok(Backup {
            skus: self.list_skus()?,
            reports: self.list_reports()?,
            timestamp: now_rfc3339(),
        })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, ServiceError> {
        match self.kv.get(key).map_err(kv_err)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| ServiceError::Corrupt(format!("collection '{}': {}", key, e))),
            None => Ok(None),
        }
    }

    fn persist<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), ServiceError> {
        let bytes = serde_json::to_vec(items)
            .map_err(|e| ServiceError::Internal(format!("serialize {}: {}", key, e)))?;
        self.kv.set(key, &bytes).map_err(kv_err)
    }
}

fn kv_err(e: KVError) -> ServiceError {
    ServiceError::Storage(e.to_string())
}
