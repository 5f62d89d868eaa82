use crate::errors::BrccsResult;
use crate::models::{Conversation, HistoryEntry, StoredSnapshot};

/// Append-only persistence for snapshots and per-speaker history.
pub trait IConversationStorage: Send + Sync {
    // --- Snapshots ---

    /// Record a snapshot under the next free ordinal and return that ordinal.
    fn record_snapshot(&self, name: &str, conversations: &[Conversation]) -> BrccsResult<i64>;

    /// All recorded snapshots, in the order they were recorded.
    fn load_snapshots(&self) -> BrccsResult<Vec<StoredSnapshot>>;

    // --- History ---

    /// Append entries for one speaker, atomically and in order.
    fn append_history(&self, speaker: &str, sentences: &[&str]) -> BrccsResult<()>;

    /// Every history entry, in storage order.
    fn load_history(&self) -> BrccsResult<Vec<HistoryEntry>>;
}
