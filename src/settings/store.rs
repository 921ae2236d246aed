//! src/settings/store.rs
//!
//! Durable string key/value storage for user settings.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid settings file: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stage a value; nothing is durable until `flush`.
    fn set(&mut self, key: &str, value: String);

    fn flush(&mut self) -> Result<(), StorageError>;
}

/// JSON object of string keys to string values, kept in one file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Store backed by `path` with nothing loaded.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            values: BTreeMap::new(),
        }
    }

    /// Load `path`; a missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::empty(path)),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let values = serde_json::from_str(&text).map_err(|source| StorageError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        let io_err = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.values).map_err(|source| {
            StorageError::Format {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, text).map_err(io_err)
    }
}

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(&dir.path().join("absent.json")).unwrap();
        assert!(store.get("updateInterval").is_none());
    }

    #[test]
    fn flush_then_reopen_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("updateInterval", "150".into());
        store.set("chartPoints", "30".into());
        store.flush().unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("updateInterval").as_deref(), Some("150"));
        assert_eq!(reopened.get("chartPoints").as_deref(), Some("30"));
    }

    #[test]
    fn unflushed_values_are_not_durable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("chartPoints", "30".into());
        assert!(!path.exists());
    }

    #[test]
    fn garbage_file_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StorageError::Format { .. })
        ));
    }
}
