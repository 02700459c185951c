//! Dashboard configuration.
//!
//! Loaded from an optional TOML file; every key has a default so an empty
//! document is valid.
//!
//! ```toml
//! storage_dir = ".medidash"
//! routes_file = "routes/custom.toml"
//! log_filter = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_contracts::error::{MedidashError, MedidashResult};

const LOCAL_STORE_FILE: &str = "local.json";
const SESSION_STORE_FILE: &str = "session.json";
const TUI_LOG_FILE: &str = "medidash-tui.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Directory holding the durable key/value file (and, for the CLI, the
    /// session file and the TUI log).
    pub storage_dir: PathBuf,

    /// Route table to load instead of the built-in one.
    pub routes_file: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".medidash"),
            routes_file: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `MedidashError::ConfigError` if the TOML is malformed or
    /// carries unknown keys.
    pub fn from_toml_str(s: &str) -> MedidashResult<Self> {
        toml::from_str(s).map_err(|e| MedidashError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> MedidashResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedidashError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), storage_dir = %config.storage_dir.display(), "loaded config");
        Ok(config)
    }

    /// `from_file` when `path` is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> MedidashResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Durable store file (plays browser local storage).
    pub fn local_store_path(&self) -> PathBuf {
        self.storage_dir.join(LOCAL_STORE_FILE)
    }

    /// Session store file, used by front ends that do not outlive one command.
    pub fn session_store_path(&self) -> PathBuf {
        self.storage_dir.join(SESSION_STORE_FILE)
    }

    pub fn tui_log_path(&self) -> PathBuf {
        self.storage_dir.join(TUI_LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.local_store_path(), PathBuf::from(".medidash/local.json"));
    }

    #[test]
    fn keys_override_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
            storage_dir = "/tmp/dash"
            routes_file = "routes.toml"
            log_filter = "debug"
        "#,
        )
        .unwrap();
        assert_eq!(config.session_store_path(), PathBuf::from("/tmp/dash/session.json"));
        assert_eq!(config.routes_file, Some(PathBuf::from("routes.toml")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn unknown_keys_are_config_errors() {
        let err = DashboardConfig::from_toml_str("storage = 1").unwrap_err();
        assert!(matches!(err, MedidashError::ConfigError { .. }));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = DashboardConfig::from_file(Path::new("/nonexistent/medidash.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(DashboardConfig::load(None).unwrap(), DashboardConfig::default());
    }
}
