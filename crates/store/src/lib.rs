//! File-backed [`ListStore`] for the booking core.
//!
//! Each key is one JSON array in `<data_dir>/<key>.json`. Writes go to a
//! sibling temp file first and are renamed into place, so a crash mid-write
//! leaves the previous list intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use lumiere_core::storage::ListStore;

/// Default data directory when `LUMIERE_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one JSON file per key.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default  |
    /// |--------------------|----------|
    /// | `LUMIERE_DATA_DIR` | `./data` |
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_data_dir_var(std::env::var("LUMIERE_DATA_DIR"))
    }

    fn from_data_dir_var(value: Result<String, std::env::VarError>) -> Result<Self, StoreError> {
        let data_dir = match value {
            Ok(v) if !v.trim().is_empty() => PathBuf::from(v),
            Ok(_) | Err(std::env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_DIR),
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(StoreError::Config(
                    "LUMIERE_DATA_DIR is not valid UTF-8".to_string(),
                ));
            }
        };
        Ok(Self { data_dir })
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.data_dir).map_err(|source| StoreError::Io {
            path: config.data_dir.clone(),
            source,
        })?;
        tracing::debug!(data_dir = %config.data_dir.display(), "JSON store opened");
        Ok(Self {
            data_dir: config.data_dir.clone(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File backing `key`. Keys are plain identifiers; anything that could
    /// escape the data directory is rejected.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }

    /// Read the list under `key`; a missing file is an empty list.
    pub fn try_load(&self, key: &str) -> Result<Vec<Value>, StoreError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Json { path, source })
    }

    /// Replace the list under `key`.
    pub fn try_save(&self, key: &str, records: &[Value]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&tmp, bytes).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }
}

impl ListStore for JsonFileStore {
    fn load_list(&self, key: &str) -> Vec<Value> {
        self.try_load(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Unreadable list, treating as empty");
            Vec::new()
        })
    }

    fn save_list(&self, key: &str, records: &[Value]) {
        if let Err(e) = self.try_save(key, records) {
            tracing::error!(key, error = %e, "Failed to save list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> JsonFileStore {
        JsonFileStore::open(&StoreConfig {
            data_dir: dir.to_path_buf(),
        })
        .unwrap()
    }

    // -- Config --

    #[test]
    fn data_dir_defaults_when_unset_or_blank() {
        let unset = StoreConfig::from_data_dir_var(Err(std::env::VarError::NotPresent)).unwrap();
        assert_eq!(unset, StoreConfig::default());
        let blank = StoreConfig::from_data_dir_var(Ok("  ".to_string())).unwrap();
        assert_eq!(blank.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn data_dir_is_taken_from_variable() {
        let config = StoreConfig::from_data_dir_var(Ok("/var/lib/lumiere".to_string())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/lumiere"));
    }

    #[test]
    fn non_unicode_data_dir_is_a_config_error() {
        let raw = std::ffi::OsString::from("data");
        let result = StoreConfig::from_data_dir_var(Err(std::env::VarError::NotUnicode(raw)));
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    // -- Paths --

    #[test]
    fn keys_map_to_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(
            store.path_for("recentBookings").unwrap(),
            dir.path().join("recentBookings.json")
        );
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        for key in ["", "../bookings", "a/b", "a.b"] {
            assert!(matches!(store.path_for(key), Err(StoreError::InvalidKey(_))));
        }
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = store_in(&nested);
        assert!(store.data_dir().is_dir());
    }

    #[test]
    fn non_array_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(dir.path().join("bookings.json"), b"{\"id\": 1}").unwrap();
        assert!(matches!(store.try_load("bookings"), Err(StoreError::Json { .. })));
        assert!(store.load_list("bookings").is_empty());
    }
}
