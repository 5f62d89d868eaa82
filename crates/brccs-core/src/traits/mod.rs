mod classifier;
mod nlp;
mod observer;
mod storage;

pub use classifier::{IClassifier, ILearner};
pub use nlp::INlpToolkit;
pub use observer::{ITrainingObserver, NoopObserver};
pub use storage::IConversationStorage;
