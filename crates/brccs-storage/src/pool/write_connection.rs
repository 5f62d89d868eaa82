//! The single serialized SQLite connection.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use brccs_core::errors::BrccsResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Mutex-guarded connection. Writes are serialized; SQLite row order
/// (`rowid`) therefore matches call order.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open (or create) a database file.
    pub fn open(path: &Path, busy_timeout_ms: u64) -> BrccsResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database (for testing).
    pub fn open_in_memory() -> BrccsResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure with exclusive access to the connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> BrccsResult<T>
    where
        F: FnOnce(&Connection) -> BrccsResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
