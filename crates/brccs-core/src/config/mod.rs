//! Configuration loaded from TOML. Every section falls back to defaults.

pub mod defaults;
mod generation_config;
mod storage_config;
mod training_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use generation_config::GenerationConfig;
pub use storage_config::StorageConfig;
pub use training_config::{TrainingConfig, TrainingMode};

use crate::errors::{BrccsError, BrccsResult};

/// NLP toolkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    /// Maximum number of cached stems.
    pub stem_cache_capacity: u64,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            stem_cache_capacity: defaults::DEFAULT_STEM_CACHE_CAPACITY,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrccsConfig {
    pub storage: StorageConfig,
    pub training: TrainingConfig,
    pub generation: GenerationConfig,
    pub nlp: NlpConfig,
    pub observability: ObservabilityConfig,
}

impl BrccsConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> BrccsResult<Self> {
        toml::from_str(source).map_err(|e| BrccsError::Config {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> BrccsResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| BrccsError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }
}
