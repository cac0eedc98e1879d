//! SQLite-backed key-value store
//!
//! A single `kv_store` table keyed by entry name. Useful when the data
//! directory lives on a filesystem where rename-over is unreliable.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::{decode_entry, KeyValueStore};
use crate::error::{Result, TrackerError};

/// SQLite database holding all tracker entries
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the database
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| TrackerError::database(format!("Failed to open store database: {}", e)))?;

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TrackerError::database(format!("Failed to open in-memory database: {}", e))
        })?;

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS kv_store (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
                );
                "#,
            )
            .map_err(|e| TrackerError::database(format!("Failed to run migrations: {}", e)))?;

        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        // Read raw bytes so a value that is not UTF-8 text reads as absent
        let bytes: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT CAST(value AS BLOB) FROM kv_store WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| TrackerError::database(format!("Failed to read {}: {}", key, e)))?;

        Ok(bytes.and_then(|b| decode_entry(key, b)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
                params![key, value],
            )
            .map_err(|e| TrackerError::database(format!("Failed to write {}: {}", key, e)))?;

        tracing::debug!(key, bytes = value.len(), "wrote store entry");
        Ok(())
    }
}
