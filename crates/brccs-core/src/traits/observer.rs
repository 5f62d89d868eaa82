use crate::models::TrainingEvent;

/// Receives progress notifications while a snapshot is trained.
pub trait ITrainingObserver: Send + Sync {
    fn notify(&self, event: &TrainingEvent);
}

impl<F> ITrainingObserver for F
where
    F: Fn(&TrainingEvent) + Send + Sync,
{
    fn notify(&self, event: &TrainingEvent) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ITrainingObserver for NoopObserver {
    fn notify(&self, _event: &TrainingEvent) {}
}
