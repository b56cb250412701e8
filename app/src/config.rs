//! Application Configuration
//!
//! JSON settings file in the app data directory. Unknown or missing keys
//! fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{DomainError, DomainResult};
use crate::services::{DEFAULT_CURRENCY, DEFAULT_REMINDER_HOUR};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    /// Defaults to `<data_dir>/logs` when unset
    pub log_dir: Option<PathBuf>,
    pub reminder_hour: u32,
    pub reminder_minute: u32,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            database_file: "thela.db".to_string(),
            log_dir: None,
            reminder_hour: DEFAULT_REMINDER_HOUR,
            reminder_minute: 0,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults rooted at `data_dir`
    pub fn for_data_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            ..Default::default()
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("logs"))
    }

    /// Read the settings file, writing defaults when it is missing or empty.
    /// A file that does not parse is left alone and defaults are used.
    pub async fn load_or_create(path: &Path) -> DomainResult<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Storage(e.to_string()))?;
        }
        let data_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        match tokio::fs::read(path).await {
            Ok(bytes) if !bytes.is_empty() => match serde_json::from_slice::<AppConfig>(&bytes) {
                Ok(config) => Ok(config),
                Err(e) => {
                    log::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    Ok(Self::for_data_dir(&data_dir))
                }
            },
            _ => {
                let config = Self::for_data_dir(&data_dir);
                config.save(path).await?;
                Ok(config)
            }
        }
    }

    pub async fn save(&self, path: &Path) -> DomainResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}
