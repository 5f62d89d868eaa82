use serde::{Deserialize, Serialize};

use super::defaults;

/// Persistence configuration. Without a `db_path` the system runs purely in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file.
    pub db_path: Option<String>,
    /// SQLite busy timeout (milliseconds).
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
