pub mod history_ops;
pub mod snapshot_ops;
