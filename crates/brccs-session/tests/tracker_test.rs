use std::sync::Arc;
use std::thread;

use brccs_core::models::HistoryEntry;
use brccs_core::traits::IConversationStorage;
use brccs_session::HistoryTracker;
use brccs_storage::StorageEngine;

#[test]
fn unknown_speaker_has_empty_history() {
    let tracker = HistoryTracker::new();
    assert!(tracker.history("nobody").unwrap().is_empty());
    assert_eq!(tracker.len("nobody").unwrap(), 0);
    assert_eq!(tracker.speaker_count(), 0);
}

#[test]
fn exchanges_append_in_order() {
    let tracker = HistoryTracker::new();
    tracker.append_exchange("alice", "hi", "hello", None).unwrap();
    tracker
        .append_exchange("alice", "how are you", "fine", None)
        .unwrap();
    tracker.append_exchange("bob", "yo", "hey", None).unwrap();

    assert_eq!(
        tracker.history("alice").unwrap(),
        vec!["hi", "hello", "how are you", "fine"]
    );
    assert_eq!(tracker.speakers(), vec!["alice", "bob"]);
    assert_eq!(tracker.len("bob").unwrap(), 2);
}

#[test]
fn exchanges_are_written_to_the_sink() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let tracker = HistoryTracker::new();
    tracker
        .append_exchange("alice", "hi", "hello", Some(&storage))
        .unwrap();

    let stored = storage.load_history().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].sentence, "hi");
    assert_eq!(stored[1].sentence, "hello");
}

#[test]
fn replay_rebuilds_per_speaker_logs() {
    let entries: Vec<HistoryEntry> = [("a", "1"), ("b", "x"), ("a", "2")]
        .iter()
        .map(|(speaker, sentence)| HistoryEntry {
            speaker: speaker.to_string(),
            sentence: sentence.to_string(),
        })
        .collect();

    let tracker = HistoryTracker::new();
    tracker.replay(&entries).unwrap();
    assert_eq!(tracker.history("a").unwrap(), vec!["1", "2"]);
    assert_eq!(tracker.history("b").unwrap(), vec!["x"]);
}

#[test]
fn concurrent_appends_keep_pairs_adjacent() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let tracker = Arc::new(HistoryTracker::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let tracker = Arc::clone(&tracker);
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                for i in 0..25 {
                    let input = format!("in-{t}-{i}");
                    let response = format!("out-{t}-{i}");
                    tracker
                        .append_exchange("shared", &input, &response, Some(&*storage))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let log = tracker.history("shared").unwrap();
    assert_eq!(log.len(), 400);
    for pair in log.chunks(2) {
        assert_eq!(pair[0].replacen("in-", "out-", 1), pair[1]);
    }

    let stored: Vec<String> = storage
        .load_history()
        .unwrap()
        .into_iter()
        .map(|e| e.sentence)
        .collect();
    assert_eq!(stored, log);
}
