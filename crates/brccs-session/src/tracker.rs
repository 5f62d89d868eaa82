//! HistoryTracker — concurrent per-speaker history via DashMap.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::debug;

use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::models::HistoryEntry;
use brccs_core::traits::IConversationStorage;

type SpeakerLog = Arc<Mutex<Vec<String>>>;

/// Thread-safe history tracker. Appends for one speaker are serialized;
/// different speakers never contend beyond the map shard.
#[derive(Default)]
pub struct HistoryTracker {
    logs: DashMap<String, SpeakerLog>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn log_for(&self, speaker: &str) -> SpeakerLog {
        if let Some(log) = self.logs.get(speaker) {
            return Arc::clone(&log);
        }
        Arc::clone(&self.logs.entry(speaker.to_string()).or_default())
    }

    /// Copy of a speaker's log, oldest first. Unknown speakers have an empty log.
    pub fn history(&self, speaker: &str) -> BrccsResult<Vec<String>> {
        let Some(log) = self.logs.get(speaker).map(|l| Arc::clone(&l)) else {
            return Ok(Vec::new());
        };
        let guard = log.lock().map_err(|e| poisoned(speaker, e))?;
        Ok(guard.clone())
    }

    /// Append an input and its response for a speaker.
    ///
    /// Both entries land in memory first, then go to `sink` while the
    /// speaker's lock is still held, so memory and storage see the same
    /// order. A sink failure is returned; the in-memory append stays.
    pub fn append_exchange(
        &self,
        speaker: &str,
        input: &str,
        response: &str,
        sink: Option<&dyn IConversationStorage>,
    ) -> BrccsResult<()> {
        let log = self.log_for(speaker);
        let mut guard = log.lock().map_err(|e| poisoned(speaker, e))?;
        guard.push(input.to_string());
        guard.push(response.to_string());

        if let Some(storage) = sink {
            storage.append_history(speaker, &[input, response])?;
        }
        debug!(speaker, entries = guard.len(), "history appended");
        Ok(())
    }

    /// Rebuild logs from persisted entries, in storage order.
    pub fn replay(&self, entries: &[HistoryEntry]) -> BrccsResult<()> {
        for entry in entries {
            let log = self.log_for(&entry.speaker);
            let mut guard = log.lock().map_err(|e| poisoned(&entry.speaker, e))?;
            guard.push(entry.sentence.clone());
        }
        debug!(entries = entries.len(), speakers = self.logs.len(), "history replayed");
        Ok(())
    }

    /// Every speaker with a log, sorted.
    pub fn speakers(&self) -> Vec<String> {
        let mut speakers: Vec<String> = self.logs.iter().map(|r| r.key().clone()).collect();
        speakers.sort();
        speakers
    }

    /// Number of entries logged for a speaker.
    pub fn len(&self, speaker: &str) -> BrccsResult<usize> {
        let Some(log) = self.logs.get(speaker).map(|l| Arc::clone(&l)) else {
            return Ok(0);
        };
        let guard = log.lock().map_err(|e| poisoned(speaker, e))?;
        Ok(guard.len())
    }

    pub fn speaker_count(&self) -> usize {
        self.logs.len()
    }
}

fn poisoned<E: std::fmt::Display>(speaker: &str, e: E) -> BrccsError {
    BrccsError::Concurrency {
        reason: format!("history lock for '{speaker}' poisoned: {e}"),
    }
}
