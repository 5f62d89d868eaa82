use serde::{Deserialize, Serialize};

use super::defaults;

/// Response generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Hard cap on response words.
    pub limit: usize,
    /// Maximum consecutive repeats of one word.
    pub recursion_limit: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            limit: defaults::DEFAULT_LIMIT,
            recursion_limit: defaults::DEFAULT_RECURSION_LIMIT,
        }
    }
}
