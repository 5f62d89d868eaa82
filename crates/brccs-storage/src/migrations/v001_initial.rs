//! v001: SnapIndex, History.
//!
//! `IF NOT EXISTS` keeps databases written by earlier tools usable as-is.

use rusqlite::Connection;

use brccs_core::errors::BrccsResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> BrccsResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS SnapIndex (
            name    TEXT,
            sindex  INTEGER
        );

        CREATE TABLE IF NOT EXISTS History (
            speaker   TEXT,
            sentence  TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_history_speaker ON History(speaker);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
