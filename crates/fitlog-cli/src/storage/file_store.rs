//! File-per-key backend

use std::fs;
use std::path::{Path, PathBuf};

use super::{decode_entry, KeyValueStore};
use crate::error::Result;

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = dir.as_ref().to_path_buf();
        crate::config::ensure_dir(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Directory holding the key files
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(decode_entry(key, fs::read(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;

        // Health data: keep it private to the user on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, &path)?;
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "wrote store entry");
        Ok(())
    }
}
