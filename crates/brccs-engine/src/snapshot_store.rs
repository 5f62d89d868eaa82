//! SnapshotStore — grow-only named snapshots with training status.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::models::{Conversation, Snapshot, TrainingStatus};

struct StoreEntry {
    snapshot: Arc<Snapshot>,
    status: TrainingStatus,
    seq: u64,
}

/// Named snapshots. A name is reserved exactly once; snapshots are never
/// replaced or removed.
#[derive(Default)]
pub struct SnapshotStore {
    entries: DashMap<String, StoreEntry>,
    next_seq: AtomicU64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name` and store its conversations. The reservation happens
    /// under the map's entry lock, so of two racing creates only one wins.
    ///
    /// Empty conversations are dropped; they yield no examples and leave no
    /// rows in storage.
    pub fn create(
        &self,
        name: &str,
        mut conversations: Vec<Conversation>,
    ) -> BrccsResult<Arc<Snapshot>> {
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(_) => Err(BrccsError::AlreadyExists {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                conversations.retain(|c| !c.is_empty());
                let snapshot = Arc::new(Snapshot::new(name, conversations));
                slot.insert(StoreEntry {
                    snapshot: Arc::clone(&snapshot),
                    status: TrainingStatus::Pending,
                    seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
                });
                Ok(snapshot)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<Snapshot>> {
        self.entries.get(name).map(|e| Arc::clone(&e.snapshot))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn status(&self, name: &str) -> Option<TrainingStatus> {
        self.entries.get(name).map(|e| e.status.clone())
    }

    /// Update the training status. Unknown names are ignored.
    pub fn set_status(&self, name: &str, status: TrainingStatus) {
        if let Some(mut entry) = self.entries.get_mut(name) {
            entry.status = status;
        }
    }

    /// Snapshot names in creation order.
    pub fn names(&self) -> Vec<String> {
        let mut named: Vec<(u64, String)> = self
            .entries
            .iter()
            .map(|r| (r.value().seq, r.key().clone()))
            .collect();
        named.sort_unstable();
        named.into_iter().map(|(_, name)| name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
