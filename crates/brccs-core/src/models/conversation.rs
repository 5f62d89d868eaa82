use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered sequence of sentences, alternating between speakers.
pub type Conversation = Vec<String>;

/// A named, immutable collection of conversations. One classifier is trained per snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub conversations: Vec<Conversation>,
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(name: impl Into<String>, conversations: Vec<Conversation>) -> Self {
        Self {
            name: name.into(),
            conversations,
            created_at: Utc::now(),
        }
    }

    /// Total number of sentences across all conversations.
    pub fn sentence_count(&self) -> usize {
        self.conversations.iter().map(Vec::len).sum()
    }
}

/// A snapshot as read back from persistent storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot {
    pub name: String,
    pub ordinal: i64,
    pub conversations: Vec<Conversation>,
}

/// One row of the persisted history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub speaker: String,
    pub sentence: String,
}
