//! Raw SQL operations for the History table.

use rusqlite::{params, Connection};

use brccs_core::errors::BrccsResult;
use brccs_core::models::HistoryEntry;

use crate::to_storage_err;

/// Append sentences for a speaker in one transaction.
pub fn append(conn: &Connection, speaker: &str, sentences: &[&str]) -> BrccsResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;
    {
        let mut stmt = tx
            .prepare("INSERT INTO History (speaker, sentence) VALUES (?1, ?2)")
            .map_err(|e| to_storage_err(e.to_string()))?;
        for sentence in sentences {
            stmt.execute(params![speaker, sentence])
                .map_err(|e| to_storage_err(e.to_string()))?;
        }
    }
    tx.commit().map_err(|e| to_storage_err(e.to_string()))
}

/// Every history row, in append order.
pub fn load_all(conn: &Connection) -> BrccsResult<Vec<HistoryEntry>> {
    let mut stmt = conn
        .prepare("SELECT speaker, sentence FROM History ORDER BY rowid")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(HistoryEntry {
                speaker: row.get(0)?,
                sentence: row.get(1)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        entries.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(entries)
}

/// Number of history rows for one speaker.
pub fn count_for_speaker(conn: &Connection, speaker: &str) -> BrccsResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM History WHERE speaker = ?1",
            params![speaker],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
