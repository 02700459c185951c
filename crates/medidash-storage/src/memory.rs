//! In-memory implementation of `KeyValueStore`.
//!
//! `InMemoryStore` keeps its entries in a map behind `Arc<Mutex<_>>`. Clones
//! share the same map, so a front end can hand one clone to the
//! `SessionManager` and keep another to inspect what was stored. Contents
//! live exactly as long as the process, which is what session-scoped storage
//! needs.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use tracing::trace;

use medidash_contracts::error::{MedidashError, MedidashResult};
use medidash_core::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MedidashResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries.lock().map_err(|e| MedidashError::StorageFailed {
            reason: format!("in-memory store lock poisoned: {}", e),
        })
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> MedidashResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> MedidashResult<()> {
        trace!(key, "in-memory set");
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> MedidashResult<()> {
        trace!(key, "in-memory remove");
        self.lock()?.remove(key);
        Ok(())
    }
}
