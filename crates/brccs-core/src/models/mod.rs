mod conversation;
mod feature;
mod label;
mod training;

pub use conversation::{Conversation, HistoryEntry, Snapshot, StoredSnapshot};
pub use feature::{FeatureValue, FeatureVector};
pub use label::Label;
pub use training::{TrainingEvent, TrainingExample, TrainingReport, TrainingStatus};
