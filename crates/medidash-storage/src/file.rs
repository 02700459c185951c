//! JSON-file implementation of `KeyValueStore`.
//!
//! `JsonFileStore` persists a flat JSON object (`{"key": "value", ...}`) at a
//! fixed path. Every read loads the file, so a value written by another
//! process (another CLI invocation, a second TUI) is seen immediately. Every
//! write rewrites the whole file through a sibling temporary file followed by
//! a rename, so readers never observe a half-written document.
//!
//! A missing file reads as an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use medidash_contracts::error::{MedidashError, MedidashResult};
use medidash_core::traits::KeyValueStore;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> MedidashResult<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(MedidashError::StorageFailed {
                    reason: format!("failed to read '{}': {}", self.path.display(), e),
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "store file is not a JSON string map");
            MedidashError::StorageCorrupt {
                reason: format!("'{}' is not a JSON string map: {}", self.path.display(), e),
            }
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> MedidashResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| MedidashError::StorageFailed {
                reason: format!("failed to create '{}': {}", parent.display(), e),
            })?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| MedidashError::StorageFailed {
            reason: format!("failed to write '{}': {}", tmp.display(), e),
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| MedidashError::StorageFailed {
            reason: format!("failed to replace '{}': {}", self.path.display(), e),
        })?;

        debug!(path = %self.path.display(), keys = entries.len(), "store file written");
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> MedidashResult<()> {
        let _guard = self.write_lock.lock().map_err(|e| MedidashError::StorageFailed {
            reason: format!("file store lock poisoned: {}", e),
        })?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> MedidashResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> MedidashResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> MedidashResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}
