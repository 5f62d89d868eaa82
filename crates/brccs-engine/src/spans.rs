//! Span definitions per operation: training, respond.

/// Create a training span.
#[macro_export]
macro_rules! training_span {
    ($snapshot:expr, $conversations:expr) => {
        tracing::info_span!("brccs.training", snapshot = %$snapshot, conversations = $conversations)
    };
}

/// Create a respond span.
#[macro_export]
macro_rules! respond_span {
    ($snapshot:expr, $limit:expr) => {
        tracing::debug_span!("brccs.respond", snapshot = %$snapshot, limit = $limit)
    };
}
