//! # medidash-storage
//!
//! Key/value stores behind the MEDIDASH session.
//!
//! ## Overview
//!
//! Two implementations of
//! [`KeyValueStore`](medidash_core::traits::KeyValueStore):
//!
//! - [`InMemoryStore`]: process-lifetime storage. The TUI uses it as
//!   session storage (the guest flag disappears when the dashboard exits).
//! - [`JsonFileStore`]: a JSON object on disk. Used as durable storage for
//!   the signed-in identity, and by the CLI for session storage as well since
//!   each CLI command is its own process.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medidash_core::SessionManager;
//! use medidash_storage::{InMemoryStore, JsonFileStore};
//!
//! let session = SessionManager::restore(
//!     Box::new(JsonFileStore::new(".medidash/local.json")),
//!     Box::new(InMemoryStore::new()),
//! )?;
//! ```

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use medidash_contracts::error::MedidashError;
    use medidash_core::{session::USER_KEY, traits::KeyValueStore, SessionManager};

    use crate::{InMemoryStore, JsonFileStore};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// A fresh path under the system temp directory. The directory itself is
    /// not created; the store must do that on first write.
    fn temp_store_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("medidash-test-{}", uuid::Uuid::new_v4()))
            .join("local.json")
    }

    fn cleanup(path: &PathBuf) {
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    // ── 1. in-memory store ────────────────────────────────────────────────────

    #[test]
    fn in_memory_set_get_remove() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("guestMode").unwrap(), None);

        store.set("guestMode", "true").unwrap();
        assert_eq!(store.get("guestMode").unwrap().as_deref(), Some("true"));
        assert_eq!(store.len(), 1);

        store.remove("guestMode").unwrap();
        assert_eq!(store.get("guestMode").unwrap(), None);

        // Removing an absent key is fine.
        store.remove("guestMode").unwrap();
    }

    #[test]
    fn in_memory_clones_share_entries() {
        let store = InMemoryStore::new();
        let view = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(view.get("k").unwrap().as_deref(), Some("v"));
    }

    // ── 2. file store ─────────────────────────────────────────────────────────

    #[test]
    fn file_store_missing_file_reads_empty() {
        let path = temp_store_path();
        let store = JsonFileStore::new(&path);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
        store.remove(USER_KEY).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = temp_store_path();
        {
            let store = JsonFileStore::new(&path);
            store.set(USER_KEY, r#"{"id":"1"}"#).unwrap();
            store.set("other", "x").unwrap();
        }

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get(USER_KEY).unwrap().as_deref(), Some(r#"{"id":"1"}"#));

        reopened.remove(USER_KEY).unwrap();
        assert_eq!(JsonFileStore::new(&path).get(USER_KEY).unwrap(), None);
        assert_eq!(JsonFileStore::new(&path).get("other").unwrap().as_deref(), Some("x"));

        cleanup(&path);
    }

    #[test]
    fn file_store_reports_corrupt_documents() {
        let path = temp_store_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = JsonFileStore::new(&path).get(USER_KEY).unwrap_err();
        assert!(matches!(err, MedidashError::StorageCorrupt { .. }));

        cleanup(&path);
    }

    // ── 3. session manager over real stores ──────────────────────────────────

    #[test]
    fn sign_in_survives_restart_but_guest_flag_does_not() {
        let path = temp_store_path();
        {
            let mut session = SessionManager::restore(
                Box::new(JsonFileStore::new(&path)),
                Box::new(InMemoryStore::new()),
            )
            .unwrap();
            assert!(session.login("doctor@example.com", "password").unwrap());
            session.guest_enter().unwrap();
        }

        let restarted = SessionManager::restore(
            Box::new(JsonFileStore::new(&path)),
            Box::new(InMemoryStore::new()),
        )
        .unwrap();
        assert_eq!(restarted.identity().unwrap().email, "doctor@example.com");
        assert!(!restarted.is_guest());

        cleanup(&path);
    }
}
