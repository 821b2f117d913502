//! Key-value accessors over the `kv_store` table.
//!
//! # Invariants
//! - `put` is an upsert; a key holds at most one value.

use crate::db::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Reads the value stored under `key`, or `None` when absent.
pub fn get(conn: &Connection, key: &str) -> DbResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1;",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Writes `value` under `key`, replacing any previous value.
pub fn put(conn: &Connection, key: &str, value: &str) -> DbResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
        params![key, value],
    )?;
    Ok(())
}
