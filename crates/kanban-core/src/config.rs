//! Board Configuration
//!
//! Tunables for the board and its storage. Defaults match the values the
//! board has always shipped with, so existing browser data keeps loading.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_PALETTE;

/// Where and how the board is stored in the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// IndexedDB database name
    pub database_name: String,
    pub database_version: u32,
    /// Object store holding the board
    pub store_name: String,
    /// Key of the board record inside the object store
    pub state_key: String,
    /// Key used when falling back to local storage
    pub local_storage_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_name: "kanban-db".to_string(),
            database_version: 1,
            store_name: "kanban-state".to_string(),
            state_key: "state".to_string(),
            local_storage_key: "kanban-state".to_string(),
        }
    }
}

/// Application-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Colors offered on a fresh or reset board
    pub default_palette: Vec<String>,
    /// Days without a backup before the reminder shows
    pub backup_reminder_days: i64,
    /// URL query parameter that triggers a settings reset
    pub reset_query_param: String,
    pub storage: StorageConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            backup_reminder_days: 7,
            reset_query_param: "reset".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl BoardConfig {
    pub fn backup_reminder_interval(&self) -> Duration {
        Duration::days(self.backup_reminder_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.backup_reminder_interval(), Duration::days(7));
        assert_eq!(config.storage.database_name, "kanban-db");
        assert_eq!(config.default_palette.len(), 6);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{ "backup_reminder_days": 14 }"#).unwrap();
        assert_eq!(config.backup_reminder_days, 14);
        assert_eq!(config.reset_query_param, "reset");
        assert_eq!(config.storage, StorageConfig::default());
    }
}
