//! Error types shared by every MEDIDASH crate.
//!
//! All fallible operations return `MedidashResult<T>`. Failures the dashboard
//! treats as ordinary outcomes (a rejected login, an appointment submitted
//! without a patient, an unknown route) are not errors and never appear here.

use thiserror::Error;

/// The unified error type for the dashboard.
#[derive(Debug, Error)]
pub enum MedidashError {
    /// A key/value store could not be read or written.
    #[error("storage operation failed: {reason}")]
    StorageFailed { reason: String },

    /// A key/value store holds data that cannot be decoded.
    #[error("storage is corrupt: {reason}")]
    StorageCorrupt { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The route table is malformed (bad TOML, empty pattern, missing login route).
    #[error("route table error: {reason}")]
    RouteTable { reason: String },

    /// A form draft failed required-field validation.
    ///
    /// `reasons` lists every violation so the caller can show them together.
    #[error("form '{form}' is invalid: {}", reasons.join("; "))]
    FormInvalid { form: String, reasons: Vec<String> },

    /// A value could not be converted to or from JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for MedidashError {
    fn from(e: serde_json::Error) -> Self {
        MedidashError::Serialization {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the MEDIDASH crates.
pub type MedidashResult<T> = Result<T, MedidashError>;
