//! Error types. `BrccsError` is the single error surfaced by every public API.

mod storage_error;

pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type BrccsResult<T> = Result<T, BrccsError>;

/// Top-level error for the BRCCS system.
#[derive(Debug, thiserror::Error)]
pub enum BrccsError {
    #[error("snapshot '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("no training data from snapshot '{name}'")]
    NoTrainingData { name: String },

    #[error("no classifier registered for snapshot '{name}'")]
    NotFound { name: String },

    #[error("nlp toolkit contract violated: {reason}")]
    ToolkitContract { reason: String },

    #[error("classifier error: {reason}")]
    Classifier { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("concurrency error: {reason}")]
    Concurrency { reason: String },
}

impl BrccsError {
    /// Whether the caller can continue after this error (e.g. retry with another name).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BrccsError::AlreadyExists { .. } | BrccsError::NotFound { .. })
    }
}
