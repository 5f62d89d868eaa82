//! # brccs-storage
//!
//! Append-only SQLite store. Layout:
//!
//! - `SnapIndex(name, sindex)`: one row per snapshot, in creation order.
//! - `Snapshot_{sindex}(context, sentence)`: one table per snapshot; `context`
//!   is the conversation index, rows keep sentence order.
//! - `History(speaker, sentence)`: every utterance, in append order.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use brccs_core::errors::{BrccsError, StorageError};

/// Wrap a SQLite failure message as a workspace error.
pub(crate) fn to_storage_err(message: String) -> BrccsError {
    BrccsError::Storage(StorageError::SqliteError { message })
}
