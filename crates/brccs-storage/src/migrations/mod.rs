//! Schema migrations, tracked through `PRAGMA user_version`.

mod v001_initial;

use rusqlite::Connection;
use tracing::info;

use brccs_core::errors::{BrccsResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> BrccsResult<()>;

/// Ordered migrations; entry `i` upgrades the schema to version `i + 1`.
const MIGRATIONS: &[Migration] = &[v001_initial::migrate];

/// Current schema version of a connection.
pub fn schema_version(conn: &Connection) -> BrccsResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's version.
pub fn run_migrations(conn: &Connection) -> BrccsResult<()> {
    let current = schema_version(conn)?;
    for (i, migrate) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = i as u32 + 1;
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        info!(version, "applied storage migration");
    }
    Ok(())
}
