//! Training pipeline: snapshot → examples → classifier → registry, run
//! inline or on a dedicated thread.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{info, warn};

use brccs_core::config::TrainingMode;
use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::models::{Snapshot, TrainingEvent, TrainingReport, TrainingStatus};
use brccs_core::traits::{IConversationStorage, ILearner, ITrainingObserver};
use brccs_features::FeatureExtractor;
use brccs_learning::build_training_set;

use crate::registry::ClassifierRegistry;
use crate::snapshot_store::SnapshotStore;
use crate::training_span;

/// Observer that forwards training events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ITrainingObserver for TracingObserver {
    fn notify(&self, event: &TrainingEvent) {
        match event {
            TrainingEvent::AlreadyExists { .. } | TrainingEvent::NoTrainingData { .. } => {
                warn!(snapshot = event.snapshot(), "{event}")
            }
            TrainingEvent::Started { .. } | TrainingEvent::Completed { .. } => {
                info!(snapshot = event.snapshot(), "{event}")
            }
        }
    }
}

enum HandleState {
    Done(BrccsResult<TrainingReport>),
    Running(JoinHandle<BrccsResult<TrainingReport>>),
}

/// Result of a dispatched training run. Dropping the handle detaches a
/// background run; its outcome is still visible through the snapshot status.
pub struct TrainingHandle {
    snapshot: String,
    state: HandleState,
}

impl TrainingHandle {
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn is_finished(&self) -> bool {
        match &self.state {
            HandleState::Done(_) => true,
            HandleState::Running(handle) => handle.is_finished(),
        }
    }

    /// Block until training ends and return its outcome.
    pub fn wait(self) -> BrccsResult<TrainingReport> {
        match self.state {
            HandleState::Done(result) => result,
            HandleState::Running(handle) => handle.join().map_err(|_| BrccsError::Concurrency {
                reason: format!("training thread for '{}' panicked", self.snapshot),
            })?,
        }
    }
}

impl std::fmt::Debug for TrainingHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingHandle")
            .field("snapshot", &self.snapshot)
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Everything a training run touches. Cheap to clone; a clone moves into
/// each background thread.
#[derive(Clone)]
pub struct TrainingPipeline {
    extractor: FeatureExtractor,
    learner: Arc<dyn ILearner>,
    snapshots: Arc<SnapshotStore>,
    registry: Arc<ClassifierRegistry>,
    storage: Option<Arc<dyn IConversationStorage>>,
    terminator_padding: usize,
}

impl TrainingPipeline {
    pub fn new(
        extractor: FeatureExtractor,
        learner: Arc<dyn ILearner>,
        snapshots: Arc<SnapshotStore>,
        registry: Arc<ClassifierRegistry>,
        storage: Option<Arc<dyn IConversationStorage>>,
        terminator_padding: usize,
    ) -> Self {
        Self {
            extractor,
            learner,
            snapshots,
            registry,
            storage,
            terminator_padding,
        }
    }

    /// Train a reserved snapshot according to `mode`.
    pub fn dispatch(
        &self,
        snapshot: Arc<Snapshot>,
        persist: bool,
        mode: TrainingMode,
        observer: Arc<dyn ITrainingObserver>,
    ) -> TrainingHandle {
        let name = snapshot.name.clone();
        let state = match mode {
            TrainingMode::Blocking => {
                HandleState::Done(self.run(&snapshot, persist, observer.as_ref()))
            }
            TrainingMode::Background => {
                let pipeline = self.clone();
                HandleState::Running(thread::spawn(move || {
                    pipeline.run(&snapshot, persist, observer.as_ref())
                }))
            }
        };
        TrainingHandle {
            snapshot: name,
            state,
        }
    }

    /// One full training run. The snapshot's status ends `Ready` once a
    /// classifier is registered, `Failed` otherwise.
    pub fn run(
        &self,
        snapshot: &Snapshot,
        persist: bool,
        observer: &dyn ITrainingObserver,
    ) -> BrccsResult<TrainingReport> {
        let span = training_span!(snapshot.name, snapshot.conversations.len());
        let _guard = span.enter();
        let started = Instant::now();
        let name = snapshot.name.as_str();

        observer.notify(&TrainingEvent::Started {
            snapshot: name.to_string(),
        });

        let (examples, labels) = match self.fit(snapshot, observer) {
            Ok(counts) => counts,
            Err(e) => {
                self.snapshots
                    .set_status(name, TrainingStatus::Failed(e.to_string()));
                return Err(e);
            }
        };

        self.snapshots.set_status(name, TrainingStatus::Ready);
        observer.notify(&TrainingEvent::Completed {
            snapshot: name.to_string(),
        });

        let persisted_ordinal = match (&self.storage, persist) {
            (Some(storage), true) => {
                let ordinal = storage
                    .record_snapshot(name, &snapshot.conversations)
                    .inspect_err(|e| warn!(snapshot = name, error = %e, "snapshot not persisted"))?;
                Some(ordinal)
            }
            _ => None,
        };

        let report = TrainingReport {
            snapshot: name.to_string(),
            examples,
            labels,
            elapsed: started.elapsed(),
            persisted_ordinal,
        };
        info!(
            snapshot = name,
            examples,
            labels,
            elapsed_ms = report.elapsed.as_millis() as u64,
            learner = self.learner.name(),
            "training finished"
        );
        Ok(report)
    }

    /// Build the example set, train, and register. Returns the example and
    /// distinct-label counts.
    fn fit(
        &self,
        snapshot: &Snapshot,
        observer: &dyn ITrainingObserver,
    ) -> BrccsResult<(usize, usize)> {
        let examples =
            build_training_set(&self.extractor, &snapshot.conversations, self.terminator_padding)?;
        if examples.is_empty() {
            observer.notify(&TrainingEvent::NoTrainingData {
                snapshot: snapshot.name.clone(),
            });
            return Err(BrccsError::NoTrainingData {
                name: snapshot.name.clone(),
            });
        }

        let classifier = self.learner.train(&examples)?;
        self.registry.register(&snapshot.name, classifier);

        let labels = examples.iter().map(|e| &e.label).collect::<HashSet<_>>().len();
        Ok((examples.len(), labels))
    }
}
