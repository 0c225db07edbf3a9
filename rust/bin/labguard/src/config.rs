//! Client configuration.
//!
//! Reads/writes `~/.labguard/config.toml`.

use std::path::{Path, PathBuf};

use labguard_core::ServiceConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding the database and backups.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_dir: String,

    /// Explicit database file. Defaults to `{data_dir}/labguard.redb`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub db_path: String,

    /// Where `labguard export` writes. Defaults to `{data_dir}/backups`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub backup_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSection {
    /// Passkey required to delete reports.
    #[serde(default = "default_passkey")]
    pub passkey: String,
}

impl Default for AdminSection {
    fn default() -> Self {
        Self {
            passkey: default_passkey(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorSection {
    /// Recorded as `createdBy` on new reports.
    #[serde(default = "default_operator")]
    pub name: String,
}

impl Default for OperatorSection {
    fn default() -> Self {
        Self {
            name: default_operator(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudSection {
    /// Shared folder where exported backups are uploaded by hand.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

/// Client configuration file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub admin: AdminSection,
    #[serde(default)]
    pub operator: OperatorSection,
    #[serde(default)]
    pub cloud: CloudSection,
}

fn default_passkey() -> String {
    "admin".to_string()
}

fn default_operator() -> String {
    "current_user".to_string()
}

impl AppConfig {
    /// Default config file path: ~/.labguard/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Storage paths, with `data_dir_override` (from `--data-dir`) taking
    /// precedence over the file.
    pub fn service_config(&self, data_dir_override: Option<&str>) -> ServiceConfig {
        let data_dir = match data_dir_override {
            Some(dir) => PathBuf::from(dir),
            None if !self.storage.data_dir.is_empty() => PathBuf::from(&self.storage.data_dir),
            None => dirs_path().join("data"),
        };
        ServiceConfig {
            data_dir: Some(data_dir),
            db_path: non_empty(&self.storage.db_path),
            backup_dir: non_empty(&self.storage.backup_dir),
        }
    }
}

fn non_empty(s: &str) -> Option<PathBuf> {
    if s.is_empty() {
        None
    } else {
        Some(PathBuf::from(s))
    }
}

/// Return the LabGuard config directory (~/.labguard).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".labguard")
}
