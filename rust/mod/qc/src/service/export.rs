use std::fs;
use std::path::{Path, PathBuf};

use labguard_core::ServiceError;
use tracing::{info, warn};

use super::QcService;
use crate::store::Backup;

impl QcService {
    pub fn export_all(&self) -> Result<Backup, ServiceError> {
        self.store.export_all()
    }

    /// Write a backup into `dir` (created if missing) and return the file
    /// path. A backup from the same day is replaced, with a warning.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf, ServiceError> {
        let backup = self.export_all()?;
        let json = serde_json::to_string_pretty(&backup)
            .map_err(|e| ServiceError::Internal(format!("serialize backup: {}", e)))?;

        fs::create_dir_all(dir)
            .map_err(|e| ServiceError::Storage(format!("create {}: {}", dir.display(), e)))?;
        let path = dir.join(backup.file_name());
        if path.exists() {
            warn!("replacing existing backup {}", path.display());
        }
        fs::write(&path, json)
            .map_err(|e| ServiceError::Storage(format!("write {}: {}", path.display(), e)))?;

        info!(
            "exported {} skus and {} reports to {}",
            backup.skus.len(),
            backup.reports.len(),
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use labguard_core::AllowAll;
    use labguard_kv::{KVStore, MemoryStore};

    use super::*;
    use crate::catalog::starter_catalog;
    use crate::store::RecordStore;

    #[test]
    fn export_writes_dated_file() {
        let kv: Arc<dyn KVStore> = Arc::new(MemoryStore::new());
        let store = Arc::new(RecordStore::new(kv, starter_catalog()));
        let svc = QcService::new(store, Arc::new(AllowAll), "tester");

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("backups");
        let path = svc.export_to(&dir).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("LabGuard_Backup_"));
        assert!(name.ends_with(".json"));

        let backup: Backup = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(backup.skus.len(), 3);
        assert!(backup.reports.is_empty());
        assert_eq!(format!("LabGuard_Backup_{}.json", &backup.timestamp[..10]), name);
    }

    #[test]
    fn same_day_export_replaces_file() {
        let kv: Arc<dyn KVStore> = Arc::new(MemoryStore::new());
        let store = Arc::new(RecordStore::new(kv, Vec::new()));
        let svc = QcService::new(store, Arc::new(AllowAll), "tester");
        let tmp = tempfile::tempdir().unwrap();

        let first = svc.export_to(tmp.path()).unwrap();
        svc.save_sku(starter_catalog().remove(0)).unwrap();
        let second = svc.export_to(tmp.path()).unwrap();
        assert_eq!(first, second);

        let backup: Backup = serde_json::from_slice(&fs::read(&second).unwrap()).unwrap();
        assert_eq!(backup.skus.len(), 1);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn export_into_file_path_fails_as_storage() {
        let kv: Arc<dyn KVStore> = Arc::new(MemoryStore::new());
        let store = Arc::new(RecordStore::new(kv, Vec::new()));
        let svc = QcService::new(store, Arc::new(AllowAll), "tester");

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let err = svc.export_to(tmp.path()).unwrap_err();
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }
}
