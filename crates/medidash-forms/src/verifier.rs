//! Schema-based form verifier.
//!
//! `FormVerifier` compiles one JSON Schema per [`FormKind`] up front and
//! checks serialized drafts against it. Every violation is collected before
//! returning so the form can flag all offending fields in one pass.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use medidash_contracts::error::{MedidashError, MedidashResult};

use crate::schema::FormKind;

pub struct FormVerifier {
    validators: HashMap<FormKind, jsonschema::Validator>,
}

impl FormVerifier {
    /// Compile the schemas for every form.
    ///
    /// Returns `MedidashError::ConfigError` if a schema document does not
    /// compile.
    pub fn new() -> MedidashResult<Self> {
        let mut validators = HashMap::new();
        for kind in FormKind::ALL {
            let validator =
                jsonschema::validator_for(&kind.schema()).map_err(|e| MedidashError::ConfigError {
                    reason: format!("invalid JSON Schema for form '{}': {}", kind.name(), e),
                })?;
            validators.insert(kind, validator);
        }
        Ok(Self { validators })
    }

    /// Check `draft` against the schema for `kind`.
    ///
    /// Returns `MedidashError::FormInvalid` listing every violation, each as
    /// `"<field pointer>: <message>"`.
    pub fn check<D: Serialize>(&self, kind: FormKind, draft: &D) -> MedidashResult<()> {
        let payload = serde_json::to_value(draft)?;
        let validator = self
            .validators
            .get(&kind)
            .ok_or_else(|| MedidashError::ConfigError {
                reason: format!("no schema compiled for form '{}'", kind.name()),
            })?;

        let reasons: Vec<String> = validator
            .iter_errors(&payload)
            .map(|error| format!("{}: {}", error.instance_path, error))
            .collect();

        if reasons.is_empty() {
            debug!(form = kind.name(), "form draft valid");
            return Ok(());
        }

        warn!(form = kind.name(), failures = reasons.len(), "form draft rejected");
        Err(invalid(kind, reasons))
    }
}

impl std::fmt::Debug for FormVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormVerifier")
            .field("forms", &self.validators.len())
            .finish()
    }
}

/// Build a `FormInvalid` error for `kind`.
pub(crate) fn invalid(kind: FormKind, reasons: Vec<String>) -> MedidashError {
    MedidashError::FormInvalid {
        form: kind.name().to_string(),
        reasons,
    }
}
