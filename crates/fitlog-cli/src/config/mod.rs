mod settings;

pub use settings::{Settings, StorageBackend};

use crate::error::{Result, TrackerError};
use std::path::{Path, PathBuf};

/// Subdirectory fitlog claims under the platform directories
const APP_DIR: &str = "fitlog";

/// Platform config directory for fitlog, reported by `fitlog config show`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| TrackerError::config("no platform config directory for this user"))?;
    Ok(base.join(APP_DIR))
}

/// Default home of the record store when `--data-dir` is not given.
///
/// On Linux this is `$XDG_DATA_HOME/fitlog`, usually `~/.local/share/fitlog`.
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| TrackerError::config("no platform data directory for this user"))?;
    Ok(base.join(APP_DIR))
}

/// Create `path` and its parents; an existing directory is left alone
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_name() {
        if let Ok(path) = config_dir() {
            assert!(path.ends_with("fitlog"));
        }
    }

    #[test]
    fn test_data_dir_name() {
        if let Ok(path) = data_dir() {
            assert!(path.ends_with("fitlog"));
        }
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("x").join("y");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
