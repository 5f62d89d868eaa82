//! # brccs-engine
//!
//! Ties the workspace together: snapshots are reserved in a
//! [`SnapshotStore`], trained by the [`TrainingPipeline`] into the
//! [`ClassifierRegistry`], and queried word by word through the
//! [`ResponseGenerator`]. [`BrccsEngine`] is the facade over all of it.

pub mod engine;
pub mod generator;
pub mod registry;
pub mod snapshot_store;
pub mod spans;
pub mod training;

pub use engine::{BrccsEngine, SnapshotOptions};
pub use generator::{RespondOptions, ResponseGenerator};
pub use registry::ClassifierRegistry;
pub use snapshot_store::SnapshotStore;
pub use training::{TracingObserver, TrainingHandle, TrainingPipeline};
