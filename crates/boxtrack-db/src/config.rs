//! # Store Configuration
//!
//! Where the database file lives.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit value (`StoreConfig::new`)
//! 2. Environment variable `BOXTRACK_DATA_DIR`
//! 3. Default: current working directory
//!
//! The file name is fixed; only the directory is configurable.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{DbError, DbResult};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "BOXTRACK_DATA_DIR";

/// Database file name inside the data directory.
pub const DATABASE_FILE_NAME: &str = "boxtrack.db";

/// Location of the store on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: PathBuf::from("."),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
        }
    }

    /// Reads `BOXTRACK_DATA_DIR`, falling back to `"."`.
    ///
    /// An empty value counts as unset.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => StoreConfig::new(dir),
            _ => StoreConfig::default(),
        }
    }

    /// Full path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Creates the data directory (and parents) if missing.
    pub fn ensure_data_dir(&self) -> DbResult<()> {
        if is_current_dir(&self.data_dir) || self.data_dir.is_dir() {
            return Ok(());
        }

        info!(path = %self.data_dir.display(), "Creating data directory");
        std::fs::create_dir_all(&self.data_dir).map_err(|e| {
            DbError::ConnectionFailed(format!(
                "cannot create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })
    }
}

fn is_current_dir(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path() {
        let config = StoreConfig::new("/var/lib/boxtrack");
        assert_eq!(
            config.database_path(),
            PathBuf::from("/var/lib/boxtrack/boxtrack.db")
        );
        assert_eq!(
            StoreConfig::default().database_path(),
            PathBuf::from("./boxtrack.db")
        );
    }

    #[test]
    fn test_ensure_data_dir_creates_nested() {
        let root = std::env::temp_dir().join(format!("boxtrack-config-{}", std::process::id()));
        let config = StoreConfig::new(root.join("a").join("b"));

        config.ensure_data_dir().unwrap();
        assert!(config.data_dir.is_dir());

        // Second call is a no-op.
        config.ensure_data_dir().unwrap();

        std::fs::remove_dir_all(&root).unwrap();
    }
}
