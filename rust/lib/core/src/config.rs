use std::path::PathBuf;

/// Storage configuration resolved at startup.
///
/// The binary builds this from its config file and command-line overrides,
/// then passes it to storage initialization and backup export.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Directory holding the database and exported backups.
    pub data_dir: Option<PathBuf>,

    /// Path to the redb database file.
    /// Defaults to `{data_dir}/labguard.redb` if not specified.
    pub db_path: Option<PathBuf>,

    /// Directory backups are written to.
    /// Defaults to `{data_dir}/backups/` if not specified.
    pub backup_dir: Option<PathBuf>,
}

impl ServiceConfig {
    /// Resolve the redb database path, falling back to `{data_dir}/labguard.redb`.
    pub fn resolve_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| self.resolve_data_subpath("labguard.redb"))
    }

    /// Resolve the backup directory.
    pub fn resolve_backup_dir(&self) -> PathBuf {
        self.backup_dir
            .clone()
            .unwrap_or_else(|| self.resolve_data_subpath("backups"))
    }

    fn resolve_data_subpath(&self, name: &str) -> PathBuf {
        self.data_dir
            .as_ref()
            .map(|d| d.join(name))
            .unwrap_or_else(|| PathBuf::from(name))
    }
}
