//! # brccs-session
//!
//! Per-speaker utterance logs. Each speaker owns an append-only log guarded
//! by its own lock; the shared index is a `DashMap`.

pub mod tracker;

pub use tracker::HistoryTracker;
