//! Storage layer for tracker data
//!
//! Everything the tracker persists lives in a flat key-value store with four
//! fixed keys. Each record collection is one JSON array; the last known weight
//! is a single number stored as text.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.local/share/fitlog/
//! ├── bmi_history.json      # file backend: one file per key
//! ├── activities.json
//! ├── heart_rates.json
//! ├── current_weight.json
//! └── fitlog.db             # sqlite backend: kv_store(key, value)
//! ```
//!
//! Writes are whole-value replacements. An append reads the array, pushes the
//! new record and writes the array back, which is fine for a single user with
//! one active session.

mod file_store;
mod memory_store;
mod records;
mod sqlite_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use records::{Collection, Record, RecordStore, CURRENT_WEIGHT_KEY};
pub use sqlite_store::SqliteStore;

use std::path::Path;

use crate::config::StorageBackend;
use crate::error::Result;

/// File name of the SQLite database inside the data directory
pub const SQLITE_FILENAME: &str = "fitlog.db";

/// Minimal key-value contract the record store is built on
pub trait KeyValueStore {
    /// Read the raw value for a key, `None` when it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for a key
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Turn raw stored bytes into text; bytes that are not UTF-8 read as absent
fn decode_entry(key: &str, bytes: Vec<u8>) -> Option<String> {
    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored entry is not valid UTF-8, treating as absent");
            None
        }
    }
}

/// Open the configured backend rooted at `data_dir`
pub fn open_backend(backend: StorageBackend, data_dir: &Path) -> Result<Box<dyn KeyValueStore>> {
    match backend {
        StorageBackend::File => Ok(Box::new(FileStore::open(data_dir)?)),
        StorageBackend::Sqlite => {
            crate::config::ensure_dir(data_dir)?;
            Ok(Box::new(SqliteStore::open(data_dir.join(SQLITE_FILENAME))?))
        }
    }
}
