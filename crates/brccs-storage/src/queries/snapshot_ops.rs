//! Raw SQL operations for SnapIndex and the per-snapshot tables.

use rusqlite::{params, Connection, OptionalExtension};

use brccs_core::errors::{BrccsResult, StorageError};
use brccs_core::models::{Conversation, StoredSnapshot};

use crate::to_storage_err;

/// Name of the table holding snapshot `ordinal`.
pub fn table_name(ordinal: i64) -> String {
    format!("Snapshot_{ordinal}")
}

/// Ordinal of a recorded snapshot, if any.
pub fn find_ordinal(conn: &Connection, name: &str) -> BrccsResult<Option<i64>> {
    conn.query_row(
        "SELECT sindex FROM SnapIndex WHERE name = ?1 ORDER BY rowid LIMIT 1",
        params![name],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Record a snapshot under the next free ordinal, in one transaction.
///
/// A name that is already recorded is left untouched and its existing
/// ordinal returned.
pub fn insert_snapshot(
    conn: &Connection,
    name: &str,
    conversations: &[Conversation],
) -> BrccsResult<i64> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    if let Some(existing) = find_ordinal(&tx, name)? {
        return Ok(existing);
    }

    let ordinal: i64 = tx
        .query_row("SELECT COALESCE(MAX(sindex) + 1, 0) FROM SnapIndex", [], |row| {
            row.get(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    let table = table_name(ordinal);

    tx.execute(
        "INSERT INTO SnapIndex (name, sindex) VALUES (?1, ?2)",
        params![name, ordinal],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    tx.execute_batch(&format!(
        "CREATE TABLE {table} (context INTEGER, sentence TEXT);"
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;

    {
        let mut stmt = tx
            .prepare(&format!(
                "INSERT INTO {table} (context, sentence) VALUES (?1, ?2)"
            ))
            .map_err(|e| to_storage_err(e.to_string()))?;
        for (context, conversation) in conversations.iter().enumerate() {
            for sentence in conversation {
                stmt.execute(params![context as i64, sentence])
                    .map_err(|e| to_storage_err(e.to_string()))?;
            }
        }
    }

    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(ordinal)
}

fn table_exists(conn: &Connection, table: &str) -> BrccsResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count > 0)
}

/// Read one snapshot table back into conversations.
///
/// Conversation indices are preserved: an interior index with no rows
/// becomes an empty conversation. Trailing empty conversations leave no
/// rows and are not recovered.
pub fn load_conversations(conn: &Connection, ordinal: i64) -> BrccsResult<Vec<Conversation>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT context, sentence FROM {} ORDER BY rowid",
            table_name(ordinal)
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut conversations: Vec<Conversation> = Vec::new();
    for row in rows {
        let (context, sentence) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let index = usize::try_from(context)
            .map_err(|_| to_storage_err(format!("negative context index {context}")))?;
        if index >= conversations.len() {
            conversations.resize_with(index + 1, Vec::new);
        }
        conversations[index].push(sentence);
    }
    Ok(conversations)
}

/// Every recorded snapshot, in SnapIndex order.
pub fn load_snapshots(conn: &Connection) -> BrccsResult<Vec<StoredSnapshot>> {
    let index: Vec<(String, i64)> = {
        let mut stmt = conn
            .prepare("SELECT name, sindex FROM SnapIndex ORDER BY rowid")
            .map_err(|e| to_storage_err(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(|e| to_storage_err(e.to_string()))?;
        rows.collect::<Result<_, _>>()
            .map_err(|e| to_storage_err(e.to_string()))?
    };

    let mut snapshots = Vec::with_capacity(index.len());
    for (name, ordinal) in index {
        if !table_exists(conn, &table_name(ordinal))? {
            return Err(StorageError::MissingSnapshotTable { name, ordinal }.into());
        }
        let conversations = load_conversations(conn, ordinal)?;
        snapshots.push(StoredSnapshot {
            name,
            ordinal,
            conversations,
        });
    }
    Ok(snapshots)
}
