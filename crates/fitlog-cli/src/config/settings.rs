//! Resolved runtime settings

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Result, TrackerError};

/// Which key-value backend holds the records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per collection
    #[default]
    File,
    /// A single SQLite database
    Sqlite,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => f.write_str("file"),
            StorageBackend::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Where and how records are stored.
///
/// Command-line flags win over environment variables; clap folds the
/// `FITLOG_DATA_DIR` and `FITLOG_BACKEND` fallbacks in before we get here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
}

impl Settings {
    /// Resolve settings, defaulting the data directory to the platform data dir
    pub fn resolve(data_dir: Option<PathBuf>, backend: StorageBackend) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => super::data_dir()?,
        };
        if data_dir.exists() && !data_dir.is_dir() {
            return Err(TrackerError::invalid_param(format!(
                "data directory {} is not a directory",
                data_dir.display()
            )));
        }
        Ok(Self { data_dir, backend })
    }
}
