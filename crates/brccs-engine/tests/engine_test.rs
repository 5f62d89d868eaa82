//! End-to-end tests through the engine facade.

use std::sync::{Arc, Mutex};
use std::thread;

use brccs_core::config::{BrccsConfig, TrainingMode};
use brccs_core::constants::RESPONSE_INDEX_FEATURE;
use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::models::{
    Conversation, FeatureValue, FeatureVector, Label, TrainingEvent, TrainingExample,
    TrainingStatus,
};
use brccs_core::traits::{IClassifier, ILearner, ITrainingObserver};
use brccs_engine::{BrccsEngine, RespondOptions, SnapshotOptions};
use brccs_nlp::DefaultToolkit;

// ── Helpers ───────────────────────────────────────────────────────────────

fn greetings() -> Vec<Conversation> {
    test_fixtures::load_conversations("greetings").conversations
}

fn recording_observer() -> (Arc<dyn ITrainingObserver>, Arc<Mutex<Vec<TrainingEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let observer: Arc<dyn ITrainingObserver> =
        Arc::new(move |event: &TrainingEvent| sink.lock().unwrap().push(event.clone()));
    (observer, events)
}

/// Always predicts the same word.
struct Always(&'static str);

impl IClassifier for Always {
    fn classify(&self, _features: &FeatureVector) -> BrccsResult<Label> {
        Ok(Label::word(self.0))
    }
}

/// Predicts `w{response_index}` forever.
struct Counting;

impl IClassifier for Counting {
    fn classify(&self, features: &FeatureVector) -> BrccsResult<Label> {
        match features.get(RESPONSE_INDEX_FEATURE) {
            Some(FeatureValue::Number(i)) => Ok(Label::word(format!("w{i}"))),
            _ => Err(BrccsError::Classifier {
                reason: "missing response index".to_string(),
            }),
        }
    }
}

struct FixedLearner(fn() -> Arc<dyn IClassifier>);

impl ILearner for FixedLearner {
    fn train(&self, _examples: &[TrainingExample]) -> BrccsResult<Arc<dyn IClassifier>> {
        Ok((self.0)())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

fn engine_with(classifier: fn() -> Arc<dyn IClassifier>) -> BrccsEngine {
    BrccsEngine::new(
        BrccsConfig::default(),
        Arc::new(DefaultToolkit::default()),
        Arc::new(FixedLearner(classifier)),
    )
}

// ── Snapshot lifecycle ────────────────────────────────────────────────────

#[test]
fn greeting_snapshot_answers_from_its_vocabulary() {
    let engine = BrccsEngine::in_memory();
    for conversation in greetings() {
        engine.add_conversation(conversation).unwrap();
    }
    let (observer, events) = recording_observer();
    let report = engine
        .create_snapshot("s1", SnapshotOptions::blocking(), observer)
        .unwrap()
        .wait()
        .unwrap();

    assert_eq!(report.examples, 158);
    assert_eq!(report.persisted_ordinal, None);
    assert_eq!(engine.pending_len().unwrap(), 0);
    assert_eq!(engine.training_status("s1"), Some(TrainingStatus::Ready));
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            TrainingEvent::Started {
                snapshot: "s1".to_string()
            },
            TrainingEvent::Completed {
                snapshot: "s1".to_string()
            },
        ]
    );

    let vocabulary = test_fixtures::load_conversations("greetings").vocabulary();
    let response = engine
        .respond("s1", "hi", &RespondOptions::default().with_limit(10))
        .unwrap();
    let words: Vec<&str> = response.split(' ').filter(|w| !w.is_empty()).collect();
    assert!(words.len() <= 10);
    assert!(words.iter().all(|w| vocabulary.contains(*w)), "{response}");
}

#[test]
fn taken_name_is_rejected_without_touching_the_buffer() {
    let engine = BrccsEngine::in_memory();
    engine
        .add_snapshot("s", greetings(), SnapshotOptions::blocking())
        .unwrap()
        .wait()
        .unwrap();

    engine
        .add_conversation(vec!["a".to_string(), "b".to_string()])
        .unwrap();
    let (observer, events) = recording_observer();
    let err = engine
        .create_snapshot("s", SnapshotOptions::blocking(), observer)
        .unwrap_err();

    assert!(matches!(err, BrccsError::AlreadyExists { .. }));
    assert!(err.is_recoverable());
    assert_eq!(engine.pending_len().unwrap(), 1);
    assert_eq!(engine.snapshot("s").unwrap().conversations, greetings());
    assert_eq!(
        *events.lock().unwrap(),
        vec![TrainingEvent::AlreadyExists {
            snapshot: "s".to_string()
        }]
    );
}

#[test]
fn empty_buffer_yields_no_training_data() {
    let engine = BrccsEngine::in_memory();
    let (observer, events) = recording_observer();
    let err = engine
        .create_snapshot("empty", SnapshotOptions::blocking(), observer)
        .unwrap()
        .wait()
        .unwrap_err();

    assert!(matches!(err, BrccsError::NoTrainingData { .. }));
    assert!(!engine.is_ready("empty"));
    assert!(matches!(
        engine.training_status("empty"),
        Some(TrainingStatus::Failed(_))
    ));
    assert_eq!(events.lock().unwrap().len(), 2);
    assert!(matches!(
        engine.respond("empty", "hi", &RespondOptions::default()),
        Err(BrccsError::NotFound { .. })
    ));
}

#[test]
fn background_failure_is_returned_by_the_handle() {
    let engine = BrccsEngine::in_memory();
    let options = SnapshotOptions {
        mode: Some(TrainingMode::Background),
        ..SnapshotOptions::default()
    };
    let handle = engine
        .add_snapshot("lonely", vec![vec!["only one".to_string()]], options)
        .unwrap();
    assert_eq!(handle.snapshot(), "lonely");
    assert!(matches!(
        handle.wait(),
        Err(BrccsError::NoTrainingData { name }) if name == "lonely"
    ));
}

#[test]
fn background_training_becomes_ready() {
    let engine = BrccsEngine::in_memory();
    let handle = engine
        .add_snapshot("bg", greetings(), SnapshotOptions::default())
        .unwrap();
    let report = handle.wait().unwrap();
    assert_eq!(report.snapshot, "bg");
    assert!(engine.is_ready("bg"));
    assert_eq!(engine.training_status("bg"), Some(TrainingStatus::Ready));
}

#[test]
fn concurrent_creates_of_one_name_succeed_once() {
    let engine = Arc::new(BrccsEngine::in_memory());
    let results: Vec<bool> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                engine
                    .add_snapshot("race", greetings(), SnapshotOptions::default())
                    .map(|handle| handle.wait().is_ok())
                    .unwrap_or(false)
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(engine.snapshot_names(), vec!["race"]);
}

#[test]
fn snapshot_names_keep_creation_order() {
    let engine = BrccsEngine::in_memory();
    for name in ["b", "a", "c"] {
        engine
            .add_snapshot(name, greetings(), SnapshotOptions::blocking())
            .unwrap()
            .wait()
            .unwrap();
    }
    assert_eq!(engine.snapshot_names(), vec!["b", "a", "c"]);
}

// ── Responses ─────────────────────────────────────────────────────────────

#[test]
fn unknown_snapshot_is_not_found_and_history_untouched() {
    let engine = BrccsEngine::in_memory();
    let options = RespondOptions::default().for_speaker("alice");
    assert!(matches!(
        engine.respond("nope", "hi", &options),
        Err(BrccsError::NotFound { name }) if name == "nope"
    ));
    assert!(engine.history("alice").unwrap().is_empty());
}

#[test]
fn repeated_word_is_suppressed() {
    let engine = engine_with(|| Arc::new(Always("again")));
    engine
        .add_snapshot("m", greetings(), SnapshotOptions::blocking())
        .unwrap()
        .wait()
        .unwrap();

    let response = engine
        .respond("m", "hi", &RespondOptions::default().with_recursion_limit(2))
        .unwrap();
    assert_eq!(response, "again");
}

#[test]
fn response_is_bounded_by_limit() {
    let engine = engine_with(|| Arc::new(Counting));
    engine
        .add_snapshot("c", greetings(), SnapshotOptions::blocking())
        .unwrap()
        .wait()
        .unwrap();

    for limit in [0, 1, 7, 25] {
        let response = engine
            .respond("c", "hi", &RespondOptions::default().with_limit(limit))
            .unwrap();
        let count = response.split(' ').filter(|w| !w.is_empty()).count();
        assert_eq!(count, limit);
    }
}

#[test]
fn speaker_history_records_each_exchange() {
    let engine = engine_with(|| Arc::new(Counting));
    engine
        .add_snapshot("c", greetings(), SnapshotOptions::blocking())
        .unwrap()
        .wait()
        .unwrap();

    let options = RespondOptions::default().for_speaker("alice").with_limit(2);
    let first = engine.respond("c", "hi", &options).unwrap();
    let second = engine.respond("c", "how are you", &options).unwrap();
    assert_eq!(first, "w0 w1");
    assert_eq!(
        engine.history("alice").unwrap(),
        vec!["hi".to_string(), first, "how are you".to_string(), second]
    );

    let anonymous = RespondOptions {
        use_history: false,
        ..options
    };
    engine.respond("c", "hi", &anonymous).unwrap();
    assert_eq!(engine.history("alice").unwrap().len(), 4);
    assert_eq!(engine.speakers(), vec!["alice"]);
}
