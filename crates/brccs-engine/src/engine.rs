//! BrccsEngine — the public facade: pending buffer, snapshot creation,
//! startup reload, and response generation with history.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use brccs_core::config::{BrccsConfig, TrainingMode};
use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::models::{Conversation, Snapshot, TrainingEvent, TrainingStatus};
use brccs_core::traits::{IConversationStorage, ILearner, INlpToolkit, ITrainingObserver};
use brccs_features::FeatureExtractor;
use brccs_learning::NaiveBayesLearner;
use brccs_nlp::DefaultToolkit;
use brccs_session::HistoryTracker;
use brccs_storage::StorageEngine;

use crate::generator::{RespondOptions, ResponseGenerator};
use crate::registry::ClassifierRegistry;
use crate::respond_span;
use crate::snapshot_store::SnapshotStore;
use crate::training::{TracingObserver, TrainingHandle, TrainingPipeline};

/// How a snapshot is created and trained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Empty the pending buffer once the name is reserved.
    pub clear_buffer_after: bool,
    /// Record the snapshot in storage after training succeeds.
    pub persist: bool,
    /// Overrides `training.mode` from the config.
    pub mode: Option<TrainingMode>,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            clear_buffer_after: true,
            persist: true,
            mode: None,
        }
    }
}

impl SnapshotOptions {
    pub fn blocking() -> Self {
        Self {
            mode: Some(TrainingMode::Blocking),
            ..Self::default()
        }
    }
}

/// Conversational response engine.
pub struct BrccsEngine {
    config: BrccsConfig,
    snapshots: Arc<SnapshotStore>,
    registry: Arc<ClassifierRegistry>,
    pipeline: TrainingPipeline,
    generator: ResponseGenerator,
    history: HistoryTracker,
    storage: Option<Arc<dyn IConversationStorage>>,
    pending: Mutex<Vec<Conversation>>,
    reloads: Mutex<Vec<TrainingHandle>>,
}

impl BrccsEngine {
    /// Engine without persistence.
    pub fn new(
        config: BrccsConfig,
        toolkit: Arc<dyn INlpToolkit>,
        learner: Arc<dyn ILearner>,
    ) -> Self {
        Self::assemble(config, toolkit, learner, None)
    }

    /// Engine with default config, toolkit, and learner, and no persistence.
    pub fn in_memory() -> Self {
        let config = BrccsConfig::default();
        let toolkit = Arc::new(DefaultToolkit::new(&config.nlp));
        Self::new(config, toolkit, Arc::new(NaiveBayesLearner::new()))
    }

    /// Engine from config with the default toolkit and learner. Opens the
    /// SQLite database when `storage.db_path` is set and reloads it.
    pub fn open(config: BrccsConfig) -> BrccsResult<Self> {
        let toolkit = Arc::new(DefaultToolkit::new(&config.nlp));
        let learner = Arc::new(NaiveBayesLearner::new());
        match config.storage.db_path.clone() {
            Some(path) => {
                let storage = StorageEngine::open(Path::new(&path), &config.storage)?;
                Self::with_storage(config, toolkit, learner, Arc::new(storage))
            }
            None => Ok(Self::new(config, toolkit, learner)),
        }
    }

    /// Engine backed by `storage`. Every stored snapshot is retrained (in
    /// `training.reload_mode`, without re-recording) and the history log is
    /// replayed. Any read failure aborts startup.
    pub fn with_storage(
        config: BrccsConfig,
        toolkit: Arc<dyn INlpToolkit>,
        learner: Arc<dyn ILearner>,
        storage: Arc<dyn IConversationStorage>,
    ) -> BrccsResult<Self> {
        let engine = Self::assemble(config, toolkit, learner, Some(Arc::clone(&storage)));

        let stored = storage.load_snapshots()?;
        let mode = engine.config.training.reload_mode;
        for snapshot in stored {
            let reserved = engine
                .snapshots
                .create(&snapshot.name, snapshot.conversations)?;
            let handle = engine
                .pipeline
                .dispatch(reserved, false, mode, Arc::new(TracingObserver));
            match mode {
                TrainingMode::Blocking => {
                    handle.wait()?;
                }
                TrainingMode::Background => engine.lock_reloads()?.push(handle),
            }
        }

        let entries = storage.load_history()?;
        engine.history.replay(&entries)?;

        info!(
            snapshots = engine.snapshots.len(),
            history_entries = entries.len(),
            "engine reloaded from storage"
        );
        Ok(engine)
    }

    fn assemble(
        config: BrccsConfig,
        toolkit: Arc<dyn INlpToolkit>,
        learner: Arc<dyn ILearner>,
        storage: Option<Arc<dyn IConversationStorage>>,
    ) -> Self {
        let extractor = FeatureExtractor::new(toolkit);
        let snapshots = Arc::new(SnapshotStore::new());
        let registry = Arc::new(ClassifierRegistry::new());
        let pipeline = TrainingPipeline::new(
            extractor.clone(),
            learner,
            Arc::clone(&snapshots),
            Arc::clone(&registry),
            storage.clone(),
            config.training.terminator_padding,
        );
        Self {
            config,
            snapshots,
            registry,
            pipeline,
            generator: ResponseGenerator::new(extractor),
            history: HistoryTracker::new(),
            storage,
            pending: Mutex::new(Vec::new()),
            reloads: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &BrccsConfig {
        &self.config
    }

    // --- Buffer ---

    /// Queue a conversation for the next `create_snapshot`.
    pub fn add_conversation(&self, conversation: Conversation) -> BrccsResult<()> {
        self.lock_pending()?.push(conversation);
        Ok(())
    }

    pub fn pending_len(&self) -> BrccsResult<usize> {
        Ok(self.lock_pending()?.len())
    }

    // --- Snapshots ---

    /// Turn the pending buffer into a snapshot named `name` and train it.
    ///
    /// Fails with `AlreadyExists` (buffer untouched) if the name is taken.
    /// Otherwise returns a handle to the training run, which may still be
    /// in progress.
    pub fn create_snapshot(
        &self,
        name: &str,
        options: SnapshotOptions,
        observer: Arc<dyn ITrainingObserver>,
    ) -> BrccsResult<TrainingHandle> {
        let snapshot = {
            let mut pending = self.lock_pending()?;
            let snapshot = self.reserve(name, pending.clone(), observer.as_ref())?;
            if options.clear_buffer_after {
                pending.clear();
            }
            snapshot
        };
        Ok(self.train(snapshot, options, observer))
    }

    /// Create and train a snapshot from `conversations` directly. The
    /// pending buffer is neither used nor cleared.
    pub fn add_snapshot(
        &self,
        name: &str,
        conversations: Vec<Conversation>,
        options: SnapshotOptions,
    ) -> BrccsResult<TrainingHandle> {
        let observer: Arc<dyn ITrainingObserver> = Arc::new(TracingObserver);
        let snapshot = self.reserve(name, conversations, observer.as_ref())?;
        Ok(self.train(snapshot, options, observer))
    }

    fn reserve(
        &self,
        name: &str,
        conversations: Vec<Conversation>,
        observer: &dyn ITrainingObserver,
    ) -> BrccsResult<Arc<Snapshot>> {
        self.snapshots.create(name, conversations).inspect_err(|e| {
            if matches!(e, BrccsError::AlreadyExists { .. }) {
                observer.notify(&TrainingEvent::AlreadyExists {
                    snapshot: name.to_string(),
                });
            }
        })
    }

    fn train(
        &self,
        snapshot: Arc<Snapshot>,
        options: SnapshotOptions,
        observer: Arc<dyn ITrainingObserver>,
    ) -> TrainingHandle {
        let mode = options.mode.unwrap_or(self.config.training.mode);
        debug!(snapshot = %snapshot.name, ?mode, persist = options.persist, "dispatching training");
        self.pipeline.dispatch(snapshot, options.persist, mode, observer)
    }

    /// Wait for snapshots reloaded in background mode. Returns the first
    /// failure after all of them finish.
    pub fn wait_for_reload(&self) -> BrccsResult<()> {
        let handles: Vec<TrainingHandle> = self.lock_reloads()?.drain(..).collect();
        let mut first_error = None;
        for handle in handles {
            if let Err(e) = handle.wait() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    pub fn training_status(&self, name: &str) -> Option<TrainingStatus> {
        self.snapshots.status(name)
    }

    pub fn snapshot(&self, name: &str) -> Option<Arc<Snapshot>> {
        self.snapshots.get(name)
    }

    /// Snapshot names in creation order.
    pub fn snapshot_names(&self) -> Vec<String> {
        self.snapshots.names()
    }

    /// Whether `name` has a trained classifier.
    pub fn is_ready(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    // --- Responses ---

    /// Respond to `sentence` with the classifier trained on `snapshot`.
    pub fn respond(
        &self,
        snapshot: &str,
        sentence: &str,
        options: &RespondOptions,
    ) -> BrccsResult<String> {
        let span = respond_span!(snapshot, options.limit);
        let _guard = span.enter();

        let classifier = self.registry.get(snapshot)?;
        let speaker = options
            .speaker
            .as_deref()
            .filter(|_| options.use_history);

        let history = match speaker {
            Some(speaker) => self.history.history(speaker)?,
            None => Vec::new(),
        };

        let words = self.generator.generate(
            classifier.as_ref(),
            sentence,
            &history,
            options.limit,
            options.recursion_limit,
        )?;
        let response = words.join(" ");

        if let Some(speaker) = speaker {
            let sink = self
                .storage
                .as_deref()
                .filter(|_| options.commit_history);
            self.history
                .append_exchange(speaker, sentence, &response, sink)?;
        }

        debug!(words = words.len(), "response generated");
        Ok(response)
    }

    /// A copy of a speaker's history, oldest first.
    pub fn history(&self, speaker: &str) -> BrccsResult<Vec<String>> {
        self.history.history(speaker)
    }

    pub fn speakers(&self) -> Vec<String> {
        self.history.speakers()
    }

    fn lock_pending(&self) -> BrccsResult<std::sync::MutexGuard<'_, Vec<Conversation>>> {
        self.pending.lock().map_err(|e| BrccsError::Concurrency {
            reason: format!("pending buffer lock poisoned: {e}"),
        })
    }

    fn lock_reloads(&self) -> BrccsResult<std::sync::MutexGuard<'_, Vec<TrainingHandle>>> {
        self.reloads.lock().map_err(|e| BrccsError::Concurrency {
            reason: format!("reload handle lock poisoned: {e}"),
        })
    }
}
