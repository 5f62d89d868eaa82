use serde::{Deserialize, Serialize};

use super::defaults;

/// How a training run is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingMode {
    /// Train on a dedicated thread; the caller gets a handle to wait on.
    Background,
    /// Train on the caller's thread before returning.
    Blocking,
}

/// Training pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Terminator labels appended after each target sentence's words.
    pub terminator_padding: usize,
    /// Dispatch mode for snapshots created at runtime.
    pub mode: TrainingMode,
    /// Dispatch mode for snapshots reloaded from storage on startup.
    pub reload_mode: TrainingMode,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            terminator_padding: defaults::DEFAULT_TERMINATOR_PADDING,
            mode: TrainingMode::Background,
            reload_mode: TrainingMode::Blocking,
        }
    }
}
