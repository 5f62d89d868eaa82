//! StorageEngine — owns the connection, runs migrations, implements
//! IConversationStorage.

use std::path::Path;

use tracing::debug;

use brccs_core::config::StorageConfig;
use brccs_core::errors::BrccsResult;
use brccs_core::models::{Conversation, HistoryEntry, StoredSnapshot};
use brccs_core::traits::IConversationStorage;

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::{history_ops, snapshot_ops};

/// SQLite-backed snapshot and history store.
pub struct StorageEngine {
    writer: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path, config: &StorageConfig) -> BrccsResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        let engine = Self { writer };
        engine.initialize()?;
        debug!(path = %path.display(), "storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> BrccsResult<Self> {
        let engine = Self {
            writer: WriteConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> BrccsResult<()> {
        self.writer.with_conn_sync(migrations::run_migrations)
    }

    /// Get a reference to the connection (for advanced operations).
    pub fn writer(&self) -> &WriteConnection {
        &self.writer
    }

    /// Ordinal of a recorded snapshot, if any.
    pub fn snapshot_ordinal(&self, name: &str) -> BrccsResult<Option<i64>> {
        self.writer
            .with_conn_sync(|conn| snapshot_ops::find_ordinal(conn, name))
    }

    /// Number of history rows recorded for a speaker.
    pub fn history_len(&self, speaker: &str) -> BrccsResult<usize> {
        self.writer
            .with_conn_sync(|conn| history_ops::count_for_speaker(conn, speaker))
    }
}

impl IConversationStorage for StorageEngine {
    fn record_snapshot(&self, name: &str, conversations: &[Conversation]) -> BrccsResult<i64> {
        let ordinal = self
            .writer
            .with_conn_sync(|conn| snapshot_ops::insert_snapshot(conn, name, conversations))?;
        debug!(snapshot = name, ordinal, "snapshot recorded");
        Ok(ordinal)
    }

    fn load_snapshots(&self) -> BrccsResult<Vec<StoredSnapshot>> {
        self.writer.with_conn_sync(snapshot_ops::load_snapshots)
    }

    fn append_history(&self, speaker: &str, sentences: &[&str]) -> BrccsResult<()> {
        self.writer
            .with_conn_sync(|conn| history_ops::append(conn, speaker, sentences))
    }

    fn load_history(&self) -> BrccsResult<Vec<HistoryEntry>> {
        self.writer.with_conn_sync(history_ops::load_all)
    }
}
